use std::sync::Arc;

use course_core::model::{CourseId, FilterMode};
use dioxus::prelude::*;
use services::CatalogService;

use crate::context::AppContext;
use crate::views::{CourseModal, ViewError, ViewState, use_shell, view_state_from_resource};
use crate::vm::{CourseCardVm, FilterOptionVm, build_filter_options, map_course_cards};

/// Shared handle to the catalog session, comparable by identity for props.
#[derive(Clone)]
pub struct CatalogHandle(pub Arc<CatalogService>);

impl PartialEq for CatalogHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct CatalogData {
    cards: Vec<CourseCardVm>,
    filters: Vec<FilterOptionVm>,
}

#[component]
pub fn CatalogView() -> Element {
    let ctx = use_context::<AppContext>();

    if let Some(service) = ctx.catalog() {
        rsx! {
            CatalogBrowser { catalog: CatalogHandle(service) }
        }
    } else {
        let reason = ctx.catalog_error().unwrap_or_default().to_owned();
        rsx! {
            CatalogUnavailable { reason }
        }
    }
}

#[component]
fn CatalogUnavailable(reason: String) -> Element {
    rsx! {
        div { class: "page catalog",
            div { class: "empty-state error-state",
                h3 { "⚠️ Could not load courses" }
                p { "Check that the catalog file exists or pass another one with --catalog." }
                pre { class: "error-detail", "{reason}" }
            }
        }
    }
}

#[component]
fn CatalogBrowser(catalog: CatalogHandle) -> Element {
    let shell = use_shell();
    let mut search = use_signal(String::new);
    let mut filter = use_signal(FilterMode::default);
    let mut selected = use_signal(|| None::<CourseId>);
    let mut revision = use_signal(|| 0_u64);

    let service = Arc::clone(&catalog.0);
    let resource = use_resource(move || {
        let service = service.clone();
        let query = search();
        let mode = filter();
        let _ = revision();
        async move {
            let views = service.search(&query, mode.clone()).await;
            let languages = service.languages().await;
            shell.set_global(service.global_progress().await);
            Ok::<_, ViewError>(CatalogData {
                cards: map_course_cards(&views),
                filters: build_filter_options(&languages, &mode),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page catalog",
            div { class: "controls",
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search courses…",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { class: "empty-state", "Loading courses..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "filters",
                        for option in data.filters {
                            FilterButton {
                                key: "{option.mode.key()}",
                                option,
                                on_select: move |mode| filter.set(mode),
                            }
                        }
                    }
                    if data.cards.is_empty() {
                        div { class: "empty-state",
                            div { class: "empty-icon", "🔍" }
                            h3 { "No courses found" }
                            p { "Try other keywords or change the filter." }
                        }
                    } else {
                        div { class: "course-grid",
                            for card in data.cards {
                                CourseCard {
                                    key: "{card.id}",
                                    card,
                                    on_open: move |id| selected.set(Some(id)),
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }

            if let Some(course_id) = selected() {
                CourseModal {
                    catalog: catalog.clone(),
                    course_id,
                    on_close: move |_| selected.set(None),
                    on_changed: move |_| revision += 1,
                }
            }
        }
    }
}

#[component]
fn FilterButton(option: FilterOptionVm, on_select: Callback<FilterMode>) -> Element {
    let class = if option.active {
        "filter-btn active"
    } else {
        "filter-btn"
    };
    let mode = option.mode.clone();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| on_select.call(mode.clone()),
            "{option.label}"
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm, on_open: Callback<CourseId>) -> Element {
    let id = card.id;

    rsx! {
        article { class: "course-card", onclick: move |_| on_open.call(id),
            div { class: "card-header",
                div { class: "card-badges",
                    span { class: "{card.level_class}", "{card.level_label}" }
                    if card.is_favorite {
                        span { class: "heart-icon", title: "Favorite", "❤️" }
                    }
                }
                h3 { class: "card-title", "{card.title}" }
                p { class: "card-desc", "{card.description}" }
            }
            div { class: "card-footer",
                span { class: "lang", "{card.language_badge}" }
                span { class: "card-percent", "{card.percent_label}" }
            }
            div { class: "card-progress",
                div { class: "card-progress-fill", style: "width: {card.percent}%" }
            }
        }
    }
}
