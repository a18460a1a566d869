use dioxus::prelude::*;

use crate::views::use_shell;

#[component]
pub fn ToastStack() -> Element {
    let shell = use_shell();
    let toasts = shell.toasts.read().clone();

    rsx! {
        div { class: "toast-container",
            for toast in toasts {
                div { key: "{toast.id}", class: "{toast.class}", "{toast.text}" }
            }
        }
    }
}
