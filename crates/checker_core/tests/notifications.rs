use std::time::Duration;

use checker_core::{
    update, AppState, Effect, FileInfo, Msg, Notification, NotificationTray, Severity, ToastId,
};

fn shown_ids(effects: &[Effect]) -> Vec<ToastId> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowToast { id, .. } => Some(*id),
            _ => None,
        })
        .collect()
}

#[test]
fn rapid_notifications_dismiss_independently() {
    checker_logging::initialize_for_tests();
    let bad = FileInfo::new("a.png", 1, "image/png");

    let (state, first) = update(AppState::new(), Msg::FileChosen(bad.clone()));
    let (state, second) = update(state, Msg::FileChosen(bad));
    let first_id = shown_ids(&first)[0];
    let second_id = shown_ids(&second)[0];
    assert_ne!(first_id, second_id);
    assert_eq!(state.toasts().len(), 2);

    let (state, effects) = update(state, Msg::ToastElapsed(first_id));
    assert_eq!(effects, vec![Effect::HideToast { id: first_id }]);
    assert_eq!(state.toasts().active_ids(), vec![second_id]);

    // A late duplicate timer for the first toast does not touch the second.
    let (state, effects) = update(state, Msg::ToastElapsed(first_id));
    assert!(effects.is_empty());
    assert_eq!(state.toasts().len(), 1);

    let (state, effects) = update(state, Msg::ToastElapsed(second_id));
    assert_eq!(effects, vec![Effect::HideToast { id: second_id }]);
    assert!(state.toasts().is_empty());
}

#[test]
fn every_toast_carries_the_configured_delay() {
    let (_, effects) = update(
        AppState::new(),
        Msg::SubmitAttempted {
            description: String::new(),
        },
    );
    let delay = effects.iter().find_map(|effect| match effect {
        Effect::ShowToast { dismiss_after, .. } => Some(*dismiss_after),
        _ => None,
    });
    assert_eq!(delay, Some(Duration::from_secs(5)));
}

#[test]
fn dismissing_toasts_leaves_workflow_untouched() {
    let file = FileInfo::new("cv.pdf", 100, "application/pdf");
    let (state, effects) = update(AppState::new(), Msg::FileChosen(file));
    let before = state.view();
    let selected = state.selected().cloned();

    let id = shown_ids(&effects)[0];
    let (state, _) = update(state, Msg::ToastElapsed(id));

    assert_eq!(state.selected().cloned(), selected);
    assert_eq!(state.view().workflow, before.workflow);
    assert_eq!(state.view().file_panel, before.file_panel);
}

#[test]
fn tray_assigns_increasing_ids() {
    let mut tray = NotificationTray::new();
    let a = tray.display(Notification::new("A", "first", Severity::Info));
    let b = tray.display(Notification::new("B", "second", Severity::Success));
    assert!(b > a);

    assert_eq!(tray.dismiss(a).map(|n| n.title), Some("A".to_string()));
    assert_eq!(tray.get(b).map(|n| n.severity), Some(Severity::Success));

    let c = tray.display(Notification::new("C", "third", Severity::Danger));
    assert!(c > b);
    assert_eq!(tray.active_ids(), vec![b, c]);
}
