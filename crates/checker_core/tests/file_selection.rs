use std::sync::Once;

use checker_core::{
    on_file_chosen, update, AppState, CheckerSettings, Effect, FileError, FileInfo, FilePanelView,
    Msg, Severity, WorkflowState, MAX_FILE_BYTES,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(checker_logging::initialize_for_tests);
}

fn pdf(name: &str, size_bytes: u64) -> FileInfo {
    FileInfo::new(name, size_bytes, "application/pdf")
}

fn toast_titles(effects: &[Effect]) -> Vec<(String, Severity)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::ShowToast { notification, .. } => {
                Some((notification.title.clone(), notification.severity))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn non_pdf_types_are_rejected() {
    init_logging();
    let settings = CheckerSettings::default();
    for mime in ["image/png", "text/plain", "application/msword", "", "application/PDF"] {
        let result = on_file_chosen(FileInfo::new("resume", 1024, mime), &settings);
        assert!(
            matches!(result, Err(FileError::InvalidFileType { .. })),
            "{mime:?} should be rejected"
        );
    }
}

#[test]
fn size_ceiling_is_inclusive() {
    let settings = CheckerSettings::default();

    let at_limit = on_file_chosen(pdf("cv.pdf", MAX_FILE_BYTES), &settings).unwrap();
    assert_eq!(at_limit.size_bytes(), 16 * 1024 * 1024);

    let over = on_file_chosen(pdf("cv.pdf", MAX_FILE_BYTES + 1), &settings);
    assert_eq!(
        over,
        Err(FileError::FileTooLarge {
            size_bytes: MAX_FILE_BYTES + 1,
            max_bytes: MAX_FILE_BYTES,
        })
    );
}

#[test]
fn type_is_checked_before_size() {
    let settings = CheckerSettings::default();
    let result = on_file_chosen(FileInfo::new("huge.png", u64::MAX, "image/png"), &settings);
    assert!(matches!(result, Err(FileError::InvalidFileType { .. })));
}

#[test]
fn valid_file_switches_to_preview() {
    init_logging();
    let file = pdf("jane_doe.pdf", 250 * 1024);
    let (mut state, effects) = update(AppState::new(), Msg::FileChosen(file.clone()));

    assert_eq!(state.workflow(), WorkflowState::FileValid);
    assert_eq!(state.selected().map(|s| s.file_info()), Some(&file));
    let view = state.view();
    assert_eq!(
        view.file_panel,
        FilePanelView::Preview {
            name: "jane_doe.pdf".to_string(),
            size_label: "250.0 KB".to_string(),
        }
    );
    assert_eq!(
        toast_titles(&effects),
        vec![("Resume selected".to_string(), Severity::Success)]
    );
    assert!(!effects.contains(&Effect::ClearFileInput));
    assert!(state.consume_dirty());
}

#[test]
fn rejected_file_clears_previous_selection() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FileChosen(pdf("first.pdf", 1000)));
    assert!(state.selected().is_some());

    let (state, effects) = update(
        state,
        Msg::FileChosen(FileInfo::new("photo.jpg", 1000, "image/jpeg")),
    );

    assert!(state.selected().is_none());
    assert_eq!(state.workflow(), WorkflowState::FileInvalid);
    assert_eq!(state.view().file_panel, FilePanelView::Placeholder);
    assert_eq!(effects[0], Effect::ClearFileInput);
    assert_eq!(
        toast_titles(&effects),
        vec![("Invalid file type".to_string(), Severity::Danger)]
    );
    let status = state.view().status.expect("status line");
    assert_eq!(status.text, "Please upload a PDF file.");
}

#[test]
fn oversized_file_reports_limit_in_megabytes() {
    let (state, effects) = update(
        AppState::new(),
        Msg::FileChosen(pdf("big.pdf", MAX_FILE_BYTES + 1)),
    );

    assert!(state.selected().is_none());
    assert_eq!(effects[0], Effect::ClearFileInput);
    let message = effects
        .iter()
        .find_map(|effect| match effect {
            Effect::ShowToast { notification, .. } => Some(notification.message.clone()),
            _ => None,
        })
        .unwrap();
    assert_eq!(
        message,
        "File size exceeds 16MB. Please upload a smaller file."
    );
}

#[test]
fn new_selection_replaces_old_one() {
    let (state, _) = update(AppState::new(), Msg::FileChosen(pdf("old.pdf", 10)));
    let (state, _) = update(state, Msg::FileChosen(pdf("new.pdf", 20)));

    let selected = state.selected().unwrap();
    assert_eq!(selected.name(), "new.pdf");
    assert_eq!(selected.size_bytes(), 20);
    assert_eq!(state.toasts().len(), 2);
}

#[test]
fn cleared_chooser_returns_to_idle() {
    let (state, _) = update(AppState::new(), Msg::FileChosen(pdf("cv.pdf", 10)));
    let (mut state, effects) = update(state, Msg::FileSelectionCleared);

    assert!(effects.is_empty());
    assert!(state.selected().is_none());
    assert_eq!(state.workflow(), WorkflowState::Idle);
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::FileSelectionCleared);
    assert!(!state.consume_dirty());
}
