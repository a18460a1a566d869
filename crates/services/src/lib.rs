#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod catalog_source;
pub mod error;
pub mod notifications;
pub mod state_store;
pub mod theme_service;

pub use course_core::Clock;

pub use app_services::{AppServices, CatalogStartup};
pub use catalog_service::{CatalogService, ChapterOutcome, CourseView, FavoriteOutcome};
pub use catalog_source::{CatalogSource, parse_catalog};
pub use error::{AppServicesError, CatalogLoadError, CatalogServiceError};
pub use notifications::{Notification, NotificationKind};
pub use state_store::{PersistedState, StateStore};
pub use theme_service::ThemeService;
