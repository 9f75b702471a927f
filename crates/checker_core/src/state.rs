use crate::view_model::{AppViewModel, FilePanelView, StatusLine, SubmitControlView};
use crate::{
    format_file_size, CheckerSettings, Notification, NotificationTray, SelectedFile, Theme,
    ThemeControlView, ToastId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowState {
    #[default]
    Idle,
    /// Last selection was rejected; behaves like `Idle`.
    FileInvalid,
    FileValid,
    /// Native submission is under way. Terminal for the page.
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    settings: CheckerSettings,
    workflow: WorkflowState,
    selected: Option<SelectedFile>,
    drop_highlight: bool,
    status: Option<StatusLine>,
    theme: Theme,
    toasts: NotificationTray,
    dirty: bool,
}

impl AppState {
    /// Default settings, light theme.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CheckerSettings, theme: Theme) -> Self {
        Self {
            settings,
            theme,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &CheckerSettings {
        &self.settings
    }

    pub fn workflow(&self) -> WorkflowState {
        self.workflow
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toasts(&self) -> &NotificationTray {
        &self.toasts
    }

    pub fn is_submitting(&self) -> bool {
        self.workflow == WorkflowState::Submitting
    }

    pub fn view(&self) -> AppViewModel {
        let file_panel = match &self.selected {
            Some(file) => FilePanelView::Preview {
                name: file.name().to_string(),
                size_label: format_file_size(file.size_bytes()),
            },
            None => FilePanelView::Placeholder,
        };
        let submitting = self.is_submitting();
        AppViewModel {
            workflow: self.workflow,
            file_panel,
            drop_zone_highlighted: self.drop_highlight,
            submit: SubmitControlView {
                enabled: !submitting,
                busy: submitting,
            },
            progress_visible: submitting,
            status: self.status.clone(),
            theme: self.theme,
            theme_control: ThemeControlView::for_theme(self.theme),
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn select_file(&mut self, file: SelectedFile) {
        self.selected = Some(file);
        self.workflow = WorkflowState::FileValid;
        self.mark_dirty();
    }

    pub(crate) fn reject_file(&mut self) {
        self.selected = None;
        self.workflow = WorkflowState::FileInvalid;
        self.mark_dirty();
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.is_none() && self.workflow == WorkflowState::Idle {
            return;
        }
        self.selected = None;
        self.workflow = WorkflowState::Idle;
        self.mark_dirty();
    }

    pub(crate) fn set_drop_highlight(&mut self, highlighted: bool) {
        if self.drop_highlight != highlighted {
            self.drop_highlight = highlighted;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
        self.mark_dirty();
    }

    pub(crate) fn begin_submitting(&mut self) {
        self.workflow = WorkflowState::Submitting;
        self.status = None;
        self.mark_dirty();
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub(crate) fn push_toast(&mut self, notification: Notification) -> ToastId {
        self.toasts.display(notification)
    }

    pub(crate) fn dismiss_toast(&mut self, id: ToastId) -> Option<Notification> {
        self.toasts.dismiss(id)
    }
}
