use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{CatalogView, use_shell};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", CatalogView)] Catalog {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let shell = use_shell();
    let theme_service = ctx.theme();

    let global_label = match *shell.global.read() {
        Some(global) => format!("{global} chapters"),
        None => "…".to_string(),
    };
    let theme_icon = if shell.theme.read().is_dark() { "☀️" } else { "🌙" };

    rsx! {
        header { class: "app-header",
            h1 { "📚 Course Catalog" }
            div { class: "header-actions",
                span { class: "global-progress", "Progress: {global_label}" }
                button {
                    class: "theme-toggle",
                    title: "Toggle theme",
                    onclick: move |_| {
                        let service = theme_service.clone();
                        let mut theme = shell.theme;
                        spawn(async move {
                            let current = *theme.read();
                            match service.toggle(current).await {
                                Ok(next) => theme.set(next),
                                Err(err) => {
                                    warn!(error = %err, "theme preference not saved");
                                    theme.set(current.toggled());
                                }
                            }
                        });
                    },
                    "{theme_icon}"
                }
            }
        }
    }
}
