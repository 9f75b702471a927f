use std::collections::BTreeMap;

pub type ToastId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
    Warning,
    Info,
}

impl Severity {
    /// Bootstrap contextual suffix (`text-bg-success`, `alert-danger`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Toasts currently on screen, keyed by their id.
///
/// Each toast is independent: it owns one dismiss timer in the adapter and
/// leaves the tray only when its own timer fires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationTray {
    next_id: ToastId,
    active: BTreeMap<ToastId, Notification>,
}

impl NotificationTray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&mut self, notification: Notification) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.active.insert(id, notification);
        id
    }

    /// Removes a toast whose timer elapsed. Unknown ids return `None`.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Notification> {
        self.active.remove(&id)
    }

    pub fn get(&self, id: ToastId) -> Option<&Notification> {
        self.active.get(&id)
    }

    pub fn active_ids(&self) -> Vec<ToastId> {
        self.active.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
