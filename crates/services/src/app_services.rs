use std::sync::Arc;

use storage::repository::Storage;
use tracing::error;

use crate::Clock;
use crate::catalog_service::CatalogService;
use crate::catalog_source::CatalogSource;
use crate::error::AppServicesError;
use crate::state_store::StateStore;
use crate::theme_service::ThemeService;

/// Outcome of the one-time catalog load.
#[derive(Clone)]
pub enum CatalogStartup {
    Ready(Arc<CatalogService>),
    /// The catalog could not be loaded; the app stays in a static error state.
    Unavailable { reason: String },
}

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    catalog: CatalogStartup,
    theme: Arc<ThemeService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails. A catalog
    /// load failure is not an error here; it is reported through
    /// `CatalogStartup::Unavailable`.
    pub async fn new_sqlite(
        db_url: &str,
        source: &CatalogSource,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, source, clock).await)
    }

    /// Build services over an existing storage handle.
    pub async fn from_storage(storage: &Storage, source: &CatalogSource, clock: Clock) -> Self {
        let store = StateStore::new(clock, Arc::clone(&storage.entries));
        let theme = Arc::new(ThemeService::new(Arc::clone(&storage.entries)));
        let catalog = match CatalogService::load(source, store).await {
            Ok(service) => CatalogStartup::Ready(Arc::new(service)),
            Err(err) => {
                error!(source = %source, error = %err, "catalog unavailable");
                CatalogStartup::Unavailable {
                    reason: err.to_string(),
                }
            }
        };
        Self { catalog, theme }
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogStartup {
        self.catalog.clone()
    }

    #[must_use]
    pub fn theme(&self) -> Arc<ThemeService> {
        Arc::clone(&self.theme)
    }
}
