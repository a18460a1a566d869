use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ToastStack, use_shell_provider};

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell_provider(ctx.initial_theme());
    let root_class = if shell.theme.read().is_dark() {
        "app-root dark"
    } else {
        "app-root"
    };

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Course Catalog" }

        div { class: "{root_class}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
            ToastStack {}
        }
    }
}
