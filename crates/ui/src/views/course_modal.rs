use std::sync::Arc;

use course_core::model::CourseId;
use dioxus::prelude::*;
use services::CatalogServiceError;
use tracing::warn;

use crate::views::{CatalogHandle, ViewError, ViewState, use_shell, view_state_from_resource};
use crate::vm::{
    ChapterContentVm, ChapterRowVm, CourseDetailVm, build_chapter_content, map_course_detail,
};

/// Split view over one course: chapter checklist on the left, reading pane on the right.
#[component]
pub fn CourseModal(
    catalog: CatalogHandle,
    course_id: CourseId,
    on_close: Callback<()>,
    on_changed: Callback<()>,
) -> Element {
    let shell = use_shell();
    let mut active_chapter = use_signal(|| None::<usize>);
    let mut save_error = use_signal(|| None::<&'static str>);

    let service = Arc::clone(&catalog.0);
    let mut resource = use_resource(move || {
        let service = service.clone();
        async move {
            let view = service.course(course_id).await.map_err(|err| {
                if matches!(err, CatalogServiceError::Catalog(_)) {
                    ViewError::UnknownCourse
                } else {
                    ViewError::Unknown
                }
            })?;
            Ok(map_course_detail(&view))
        }
    });

    let toggle_service = Arc::clone(&catalog.0);
    let on_toggle = use_callback(move |(index, complete): (usize, bool)| {
        let service = toggle_service.clone();
        spawn(async move {
            match service.toggle_chapter(course_id, index, complete).await {
                Ok(outcome) => {
                    shell.set_global(outcome.global);
                    if let Some(notification) = outcome.notification.as_ref() {
                        shell.notify(notification);
                    }
                    save_error.set(None);
                    on_changed.call(());
                }
                Err(err) => {
                    warn!(course = %course_id, chapter = index, error = %err, "chapter toggle failed");
                    save_error.set(Some("Progress could not be saved."));
                }
            }
            resource.restart();
        });
    });

    let favorite_service = Arc::clone(&catalog.0);
    let on_favorite = use_callback(move |()| {
        let service = favorite_service.clone();
        spawn(async move {
            match service.toggle_favorite(course_id).await {
                Ok(outcome) => {
                    shell.notify(&outcome.notification);
                    save_error.set(None);
                    on_changed.call(());
                }
                Err(err) => {
                    warn!(course = %course_id, error = %err, "favorite toggle failed");
                    save_error.set(Some("Favorites could not be saved."));
                }
            }
            resource.restart();
        });
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal",
                onclick: move |evt| evt.stop_propagation(),
                match state {
                    ViewState::Idle => rsx! {},
                    ViewState::Loading => rsx! {
                        p { class: "modal-loading", "Loading..." }
                    },
                    ViewState::Ready(detail) => {
                        let content = active_chapter()
                            .and_then(|index| detail.chapters.get(index))
                            .map(|row| build_chapter_content(&row.title, row.index));
                        let chapters = detail.chapters.clone();
                        rsx! {
                            ModalHeader {
                                detail,
                                on_favorite,
                                on_close,
                            }
                            if let Some(message) = save_error() {
                                p { class: "save-error", "{message}" }
                            }
                            div { class: "modal-body",
                                nav { class: "chapters-nav",
                                    h4 { "Chapters" }
                                    ul {
                                        for row in chapters {
                                            ChapterRow {
                                                key: "{row.index}",
                                                row,
                                                active_index: active_chapter(),
                                                on_toggle,
                                                on_open: move |index| active_chapter.set(Some(index)),
                                            }
                                        }
                                    }
                                }
                                ChapterPane { content }
                            }
                        }
                    }
                    ViewState::Error(err) => rsx! {
                        div { class: "modal-error",
                            p { "{err.message()}" }
                            button { onclick: move |_| on_close.call(()), "Close" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ModalHeader(detail: CourseDetailVm, on_favorite: Callback<()>, on_close: Callback<()>) -> Element {
    let fill_class = if detail.is_complete {
        "progress-fill complete"
    } else {
        "progress-fill"
    };
    let favorite_class = if detail.is_favorite {
        "fav-btn active"
    } else {
        "fav-btn"
    };

    rsx! {
        header { class: "modal-header",
            div { class: "modal-title",
                span { class: "{detail.level_class}", "{detail.level_label}" }
                span { class: "lang", "{detail.language_badge}" }
                h2 { "{detail.title}" }
                p { class: "card-desc", "{detail.description}" }
            }
            div { class: "modal-progress",
                div { class: "progress-track",
                    div { class: "{fill_class}", style: "width: {detail.percent}%" }
                }
                span { class: "progress-text", "{detail.progress_label}" }
            }
            div { class: "modal-actions",
                button {
                    class: "{favorite_class}",
                    onclick: move |_| on_favorite.call(()),
                    "{detail.favorite_label}"
                }
                button {
                    class: "close-icon",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
        }
    }
}

#[component]
fn ChapterRow(
    row: ChapterRowVm,
    #[props(!optional)] active_index: Option<usize>,
    on_toggle: Callback<(usize, bool)>,
    on_open: Callback<usize>,
) -> Element {
    let index = row.index;
    let completed = row.completed;
    let class = if active_index == Some(index) {
        "active-chapter"
    } else {
        ""
    };

    rsx! {
        li { class: "{class}",
            div { class: "chapter-item",
                input {
                    r#type: "checkbox",
                    checked: completed,
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_toggle.call((index, !completed));
                    },
                }
                span {
                    class: "chapter-title",
                    onclick: move |_| on_open.call(index),
                    "{row.title}"
                }
            }
        }
    }
}

#[component]
fn ChapterPane(#[props(!optional)] content: Option<ChapterContentVm>) -> Element {
    match content {
        Some(content) => rsx! {
            article { class: "chapter-content",
                span { class: "badge", "{content.badge}" }
                div { dangerous_inner_html: "{content.html}" }
            }
        },
        None => rsx! {
            div { class: "content-placeholder",
                span { class: "icon", "👈" }
                h3 { "Select a chapter" }
                p { "Start learning by clicking a chapter in the list." }
            }
        },
    }
}
