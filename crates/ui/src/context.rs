use std::sync::Arc;

use course_core::model::ThemePreference;
use services::{CatalogService, CatalogStartup, ThemeService};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> CatalogStartup;
    fn theme(&self) -> Arc<ThemeService>;
    /// Theme restored from storage before the window opens.
    fn initial_theme(&self) -> ThemePreference;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: CatalogStartup,
    theme: Arc<ThemeService>,
    initial_theme: ThemePreference,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            theme: app.theme(),
            initial_theme: app.initial_theme(),
        }
    }

    /// The catalog session, or `None` when the catalog failed to load.
    #[must_use]
    pub fn catalog(&self) -> Option<Arc<CatalogService>> {
        match &self.catalog {
            CatalogStartup::Ready(service) => Some(Arc::clone(service)),
            CatalogStartup::Unavailable { .. } => None,
        }
    }

    #[must_use]
    pub fn catalog_error(&self) -> Option<&str> {
        match &self.catalog {
            CatalogStartup::Ready(_) => None,
            CatalogStartup::Unavailable { reason } => Some(reason),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }

    #[must_use]
    pub fn initial_theme(&self) -> ThemePreference {
        self.initial_theme
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
