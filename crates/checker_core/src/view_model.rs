use crate::{Severity, Theme, ThemeControlView, WorkflowState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub workflow: WorkflowState,
    pub file_panel: FilePanelView,
    pub drop_zone_highlighted: bool,
    pub submit: SubmitControlView,
    pub progress_visible: bool,
    pub status: Option<StatusLine>,
    pub theme: Theme,
    pub theme_control: ThemeControlView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilePanelView {
    Placeholder,
    Preview { name: String, size_label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControlView {
    pub enabled: bool,
    pub busy: bool,
}

/// Inline status text under the form, mirroring the latest outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub severity: Severity,
}

pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{bytes} B")
    }
}
