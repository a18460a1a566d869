use services::{Notification, NotificationKind};

/// A transient notification on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub id: u64,
    pub class: String,
    pub text: String,
}

impl ToastVm {
    #[must_use]
    pub fn new(id: u64, notification: &Notification) -> Self {
        let kind = notification.kind();
        let icon = match kind {
            NotificationKind::Success => "✅",
            NotificationKind::Info => "ℹ️",
        };
        Self {
            id,
            class: format!("toast toast-{}", kind.as_str()),
            text: format!("{icon} {}", notification.message()),
        }
    }
}
