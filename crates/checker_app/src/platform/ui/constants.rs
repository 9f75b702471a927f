pub const ANALYZE_FORM: &str = "form[action=\"/analyze\"]";
pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
pub const INPUT_RESUME: &str = "resume";
pub const TEXTAREA_JOB_DESCRIPTION: &str = "job_description";
pub const UPLOAD_PLACEHOLDER: &str = "upload-placeholder";
pub const UPLOAD_PREVIEW: &str = "upload-preview";
pub const LABEL_FILE_NAME: &str = "selected-file-name";
pub const DROP_ZONE: &str = "drop-zone";
pub const LABEL_STATUS: &str = "upload-status";
pub const PROGRESS_ANALYSIS: &str = "analysis-progress";

pub const NAVBAR: &str = "nav.navbar";
pub const NAVBAR_CONTAINER: &str = ".container, .container-fluid";
pub const BUTTON_THEME_TOGGLE: &str = "theme-toggle";
pub const TOAST_CONTAINER: &str = "toast-container";
pub const SCRIPT_SETTINGS: &str = "checker-settings";

pub const SCORE_CIRCLES: &str = "[id$=\"-score-circle\"]";
pub const COLLAPSIBLE: &str = ".collapse";
pub const PRINT_TRIGGER: &str = "[data-action=\"print-report\"]";
pub const TOOLTIP_TRIGGERS: &str = "[data-bs-toggle=\"tooltip\"]";
pub const POPOVER_TRIGGERS: &str = "[data-bs-toggle=\"popover\"]";

pub const THEME_ATTRIBUTE: &str = "data-bs-theme";
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
