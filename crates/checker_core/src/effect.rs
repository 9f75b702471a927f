use std::time::Duration;

use crate::{Notification, Theme, ToastId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Reset the file input so no rejected file stays attached to the form.
    ClearFileInput,
    /// Put the first dropped file, and only that one, on the file input.
    AttachDroppedFile,
    ShowToast {
        id: ToastId,
        notification: Notification,
        dismiss_after: Duration,
    },
    HideToast { id: ToastId },
    /// Prevent the native form submission for this submit event.
    CancelSubmit,
    /// Let the native form submission continue.
    ProceedSubmit,
    ApplyTheme(Theme),
    PersistTheme(Theme),
}
