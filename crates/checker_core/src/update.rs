use checker_logging::{checker_debug, checker_info};

use crate::view_model::StatusLine;
use crate::{
    on_file_chosen, on_submit_attempt, AppState, Effect, FileError, FileInfo, Msg, Notification,
    Severity, ValidationError,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FileChosen(file) => {
            if state.is_submitting() {
                return (state, Vec::new());
            }
            choose_file(&mut state, file)
        }
        Msg::FileSelectionCleared => {
            if !state.is_submitting() {
                state.clear_selection();
            }
            Vec::new()
        }
        Msg::DragEntered => {
            state.set_drop_highlight(true);
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drop_highlight(false);
            Vec::new()
        }
        Msg::FilesDropped(files) => {
            state.set_drop_highlight(false);
            if state.is_submitting() {
                return (state, Vec::new());
            }
            // Only the first file counts; the form carries a single resume.
            match files.into_iter().next() {
                Some(file) => {
                    let mut effects = choose_file(&mut state, file);
                    if state.selected().is_some() {
                        effects.insert(0, Effect::AttachDroppedFile);
                    }
                    effects
                }
                None => Vec::new(),
            }
        }
        Msg::SubmitAttempted { description } => {
            if state.is_submitting() {
                return (state, vec![Effect::CancelSubmit]);
            }
            match on_submit_attempt(state.selected(), &description, state.settings()) {
                Ok(()) => {
                    checker_info!("Submission validated, handing over to the form");
                    state.begin_submitting();
                    vec![Effect::ProceedSubmit]
                }
                Err(err) => {
                    checker_debug!("Submission blocked: {}", err);
                    let notice = validation_notice(&err);
                    vec![Effect::CancelSubmit, report(&mut state, notice)]
                }
            }
        }
        Msg::ThemeToggled => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::ApplyTheme(theme), Effect::PersistTheme(theme)]
        }
        Msg::ToastElapsed(id) => match state.dismiss_toast(id) {
            Some(_) => vec![Effect::HideToast { id }],
            None => Vec::new(),
        },
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn choose_file(state: &mut AppState, file: FileInfo) -> Vec<Effect> {
    match on_file_chosen(file, state.settings()) {
        Ok(selected) => {
            checker_info!(
                "Accepted file name={} size={}",
                selected.name(),
                selected.size_bytes()
            );
            let notice = Notification::new(
                "Resume selected",
                format!("{} is ready for analysis.", selected.name()),
                Severity::Success,
            );
            state.select_file(selected);
            vec![report(state, notice)]
        }
        Err(err) => {
            checker_info!("Rejected file: {}", err);
            state.reject_file();
            let notice = file_notice(&err, state);
            vec![Effect::ClearFileInput, report(state, notice)]
        }
    }
}

/// Mirrors a notice in the status line and queues its toast.
fn report(state: &mut AppState, notice: Notification) -> Effect {
    state.set_status(StatusLine {
        text: notice.message.clone(),
        severity: notice.severity,
    });
    let dismiss_after = state.settings().toast_dismiss_after();
    let id = state.push_toast(notice.clone());
    Effect::ShowToast {
        id,
        notification: notice,
        dismiss_after,
    }
}

fn file_notice(err: &FileError, state: &AppState) -> Notification {
    match err {
        FileError::InvalidFileType { .. } => Notification::new(
            "Invalid file type",
            "Please upload a PDF file.",
            Severity::Danger,
        ),
        FileError::FileTooLarge { .. } => Notification::new(
            "File too large",
            format!(
                "File size exceeds {}MB. Please upload a smaller file.",
                state.settings().max_file_mib()
            ),
            Severity::Danger,
        ),
    }
}

fn validation_notice(err: &ValidationError) -> Notification {
    match err {
        ValidationError::MissingFile => Notification::new(
            "No resume selected",
            "Please select a PDF resume to upload.",
            Severity::Warning,
        ),
        ValidationError::DescriptionTooShort { min, .. } => Notification::new(
            "Job description too short",
            format!(
                "Please enter a more detailed job description (at least {min} characters)."
            ),
            Severity::Warning,
        ),
    }
}
