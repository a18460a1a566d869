use std::time::Duration;

use course_core::model::{GlobalProgress, ThemePreference};
use dioxus::prelude::*;
use services::Notification;

use crate::vm::ToastVm;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Window-wide reactive state shared by the header, the catalog, and the toasts.
#[derive(Clone, Copy)]
pub struct Shell {
    pub global: Signal<Option<GlobalProgress>>,
    pub toasts: Signal<Vec<ToastVm>>,
    pub theme: Signal<ThemePreference>,
    next_toast_id: Signal<u64>,
}

impl Shell {
    /// Show `notification` and schedule its removal after [`TOAST_TTL`].
    pub fn notify(self, notification: &Notification) {
        let mut next_id = self.next_toast_id;
        let id = next_id() + 1;
        next_id.set(id);

        let mut toasts = self.toasts;
        toasts.write().push(ToastVm::new(id, notification));
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            toasts.write().retain(|toast| toast.id != id);
        });
    }

    pub fn set_global(self, global: GlobalProgress) {
        let mut signal = self.global;
        signal.set(Some(global));
    }
}

pub fn use_shell_provider(theme: ThemePreference) -> Shell {
    use_context_provider(|| Shell {
        global: Signal::new(None),
        toasts: Signal::new(Vec::new()),
        theme: Signal::new(theme),
        next_toast_id: Signal::new(0),
    })
}

#[must_use]
pub fn use_shell() -> Shell {
    use_context::<Shell>()
}
