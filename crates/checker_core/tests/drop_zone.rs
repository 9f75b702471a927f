use checker_core::{update, AppState, Effect, FileInfo, Msg, WorkflowState};
use pretty_assertions::assert_eq;

fn resume() -> FileInfo {
    FileInfo::new("resume.pdf", 120_000, "application/pdf")
}

#[test]
fn dropping_a_pdf_matches_choosing_it() {
    checker_logging::initialize_for_tests();

    let (chosen, chosen_effects) = update(AppState::new(), Msg::FileChosen(resume()));

    let (dragged, _) = update(AppState::new(), Msg::DragEntered);
    let (dropped, dropped_effects) = update(
        dragged,
        Msg::FilesDropped(vec![resume()]),
    );

    assert_eq!(dropped, chosen);
    assert_eq!(dropped.view(), chosen.view());
    // A drop also has to put the file on the input the form submits.
    assert_eq!(dropped_effects[0], Effect::AttachDroppedFile);
    assert_eq!(dropped_effects[1..], chosen_effects[..]);
}

#[test]
fn only_first_dropped_file_is_used() {
    let other = FileInfo::new("notes.txt", 10, "text/plain");
    let (state, effects) = update(
        AppState::new(),
        Msg::FilesDropped(vec![resume(), other]),
    );

    assert_eq!(state.selected().unwrap().name(), "resume.pdf");
    assert!(!effects.contains(&Effect::ClearFileInput));
}

#[test]
fn multi_file_drop_attaches_only_the_validated_file() {
    let huge = FileInfo::new("huge.zip", 900 * 1024 * 1024, "application/zip");
    let (state, effects) = update(AppState::new(), Msg::FilesDropped(vec![resume(), huge]));

    let attached = effects
        .iter()
        .filter(|effect| **effect == Effect::AttachDroppedFile)
        .count();
    assert_eq!(attached, 1);
    assert_eq!(state.workflow(), WorkflowState::FileValid);
    assert_eq!(state.selected().unwrap().size_bytes(), 120_000);
}

#[test]
fn dropping_invalid_file_takes_the_rejection_path() {
    let (state, _) = update(AppState::new(), Msg::DragEntered);
    let (state, effects) = update(
        state,
        Msg::FilesDropped(vec![FileInfo::new("cv.docx", 10, "application/msword")]),
    );

    assert_eq!(state.workflow(), WorkflowState::FileInvalid);
    assert!(!state.view().drop_zone_highlighted);
    assert_eq!(effects[0], Effect::ClearFileInput);
    assert!(!effects.contains(&Effect::AttachDroppedFile));
}

#[test]
fn rejected_first_file_is_never_attached_even_if_a_later_one_is_valid() {
    let zip = FileInfo::new("cv.zip", 10, "application/zip");
    let (state, effects) = update(AppState::new(), Msg::FilesDropped(vec![zip, resume()]));

    assert_eq!(state.workflow(), WorkflowState::FileInvalid);
    assert!(state.selected().is_none());
    assert!(!effects.contains(&Effect::AttachDroppedFile));
}

#[test]
fn drop_while_submitting_attaches_nothing() {
    let (state, _) = update(AppState::new(), Msg::FileChosen(resume()));
    let (state, _) = update(
        state,
        Msg::SubmitAttempted {
            description: "x".repeat(80),
        },
    );
    assert!(state.is_submitting());

    let (_, effects) = update(state, Msg::FilesDropped(vec![resume()]));
    assert!(effects.is_empty());
}

#[test]
fn highlight_follows_enter_and_leave() {
    let (mut state, _) = update(AppState::new(), Msg::DragEntered);
    assert!(state.view().drop_zone_highlighted);
    assert!(state.consume_dirty());

    // Repeated dragover events do not trigger re-renders.
    let (mut state, effects) = update(state, Msg::DragEntered);
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::DragLeft);
    assert!(!state.view().drop_zone_highlighted);
    assert!(effects.is_empty());
}

#[test]
fn empty_drop_only_clears_highlight() {
    let (state, _) = update(AppState::new(), Msg::DragEntered);
    let (state, effects) = update(state, Msg::FilesDropped(Vec::new()));

    assert!(effects.is_empty());
    assert!(!state.view().drop_zone_highlighted);
    assert_eq!(state.workflow(), WorkflowState::Idle);
    assert!(state.toasts().is_empty());
}
