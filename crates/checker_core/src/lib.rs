//! Resume checker core: pure upload workflow state machine and view-model helpers.
pub mod dashboard;
mod effect;
mod msg;
mod notify;
mod settings;
mod state;
mod theme;
mod update;
mod validation;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use notify::{Notification, NotificationTray, Severity, ToastId};
pub use settings::{
    CheckerSettings, SettingsError, MAX_FILE_BYTES, MIN_DESCRIPTION_CHARS, PDF_MIME_TYPE,
    TOAST_DISMISS_MS,
};
pub use state::{AppState, WorkflowState};
pub use theme::{
    resolve_theme, store_theme, MemoryStore, PreferenceStore, StoreError, Theme,
    ThemeControlView, UnknownTheme, THEME_KEY,
};
pub use update::update;
pub use validation::{
    on_file_chosen, on_submit_attempt, FileError, FileInfo, SelectedFile, ValidationError,
};
pub use view_model::{format_file_size, AppViewModel, FilePanelView, StatusLine, SubmitControlView};
