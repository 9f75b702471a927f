//! Class names and static markup shared by the renderer and the toast host.
//!
//! Nothing here touches the DOM, so it builds and tests on every target.

use checker_core::Severity;

pub const HIDDEN_CLASS: &str = "d-none";
pub const DROP_HIGHLIGHT_CLASS: &str = "drag-over";
pub const TOAST_SHOW_CLASS: &str = "show";
pub const COLLAPSE_SHOW_CLASS: &str = "show";

/// Fade-out duration of a Bootstrap toast before its element is removed.
pub const TOAST_FADE_MS: u32 = 150;

/// Delay between expanding collapsed sections and opening the print dialog.
pub const PRINT_DELAY_MS: u32 = 500;

pub const SUBMIT_BUSY_HTML: &str = "<span class=\"spinner-border spinner-border-sm\" \
     role=\"status\" aria-hidden=\"true\"></span> Analyzing...";

pub fn toast_classes(severity: Severity) -> String {
    format!(
        "toast fade {TOAST_SHOW_CLASS} align-items-center text-bg-{} border-0",
        severity.as_str()
    )
}

pub fn toast_icon_classes(severity: Severity) -> String {
    let icon = match severity {
        Severity::Success => "bi-check-circle-fill",
        Severity::Danger => "bi-exclamation-triangle-fill",
        Severity::Warning => "bi-exclamation-circle-fill",
        Severity::Info => "bi-info-circle-fill",
    };
    format!("bi {icon} me-2")
}

/// Screen readers interrupt for failures and wait politely otherwise.
pub fn toast_live_region(severity: Severity) -> &'static str {
    match severity {
        Severity::Danger | Severity::Warning => "assertive",
        Severity::Success | Severity::Info => "polite",
    }
}

pub fn status_classes(severity: Severity) -> String {
    format!("form-text text-{}", severity.as_str())
}

pub fn toast_element_id(id: checker_core::ToastId) -> String {
    format!("checker-toast-{id}")
}

/// Attributes written to carry a tooltip's text.
///
/// Bootstrap moves `title` into `data-bs-original-title` when it takes over a
/// tooltip, so from then on `title` must stay unset or the browser shows its
/// own tooltip on top.
pub fn tooltip_attributes(text: &str, bootstrap_owned: bool) -> Vec<(&'static str, &str)> {
    let mut attributes = vec![("aria-label", text), ("data-bs-original-title", text)];
    if !bootstrap_owned {
        attributes.insert(0, ("title", text));
    }
    attributes
}
