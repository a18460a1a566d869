use std::sync::Arc;

use course_core::model::{Catalog, Course, CourseId, Level, ThemePreference};
use course_core::time::fixed_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{CatalogService, CatalogStartup, StateStore, ThemeService};
use storage::repository::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{CatalogHandle, CatalogView, CourseModal, use_shell_provider};

#[derive(Clone)]
struct TestApp {
    catalog: CatalogStartup,
    theme: Arc<ThemeService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> CatalogStartup {
        self.catalog.clone()
    }

    fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    fn initial_theme(&self) -> ThemePreference {
        ThemePreference::Light
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Catalog,
    Course(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_shell_provider(ctx.initial_theme());

    match (props.view, ctx.catalog()) {
        (ViewKind::Catalog, _) => rsx! { CatalogView {} },
        (ViewKind::Course(id), Some(service)) => rsx! {
            CourseModal {
                catalog: CatalogHandle(service),
                course_id: CourseId::new(id),
                on_close: |_| {},
                on_changed: |_| {},
            }
        },
        (ViewKind::Course(_), None) => rsx! {},
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub catalog: Option<Arc<CatalogService>>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Rebuild, then poll until pending resources have resolved.
    pub async fn settle(&mut self) -> String {
        self.rebuild();
        for _ in 0..5 {
            let html = self.render();
            if !html.contains("Loading") {
                return html;
            }
            self.drive_async().await;
        }
        self.render()
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        Course::new(
            CourseId::new(1),
            "Alpha Script",
            "Variables and closures",
            "js",
            Level::Beginner,
            vec![
                "Intro".into(),
                "Types".into(),
                "Functions".into(),
                "Closures".into(),
            ],
        ),
        Course::new(
            CourseId::new(2),
            "Beta Python",
            "Data wrangling",
            "python",
            Level::Advanced,
            vec!["Pandas".into(), "Plots".into()],
        ),
    ])
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let storage = Storage::in_memory();
    let store = StateStore::new(fixed_clock(), Arc::clone(&storage.entries));
    let catalog = Arc::new(CatalogService::open(sample_catalog(), store).await);
    build_harness(
        view,
        &storage,
        CatalogStartup::Ready(Arc::clone(&catalog)),
        Some(catalog),
    )
}

pub fn setup_unavailable_harness(reason: &str) -> ViewHarness {
    let storage = Storage::in_memory();
    build_harness(
        ViewKind::Catalog,
        &storage,
        CatalogStartup::Unavailable {
            reason: reason.to_string(),
        },
        None,
    )
}

fn build_harness(
    view: ViewKind,
    storage: &Storage,
    startup: CatalogStartup,
    catalog: Option<Arc<CatalogService>>,
) -> ViewHarness {
    let app = Arc::new(TestApp {
        catalog: startup,
        theme: Arc::new(ThemeService::new(Arc::clone(&storage.entries))),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view });
    ViewHarness { dom, catalog }
}
