use std::env;
use std::fmt;
use std::path::PathBuf;

use course_core::model::{Catalog, Course};
use reqwest::{Client, Url};
use tracing::info;

use crate::error::CatalogLoadError;

/// Where the catalog document is read from. It is read exactly once per session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Url(Url),
}

impl CatalogSource {
    /// `http://` and `https://` values become URLs; anything else is a file path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            if let Ok(url) = Url::parse(trimmed) {
                return Self::Url(url);
            }
        }
        Self::File(PathBuf::from(trimmed))
    }

    /// Reads `CATALOG_SOURCE`, ignoring blank values.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let raw = env::var("CATALOG_SOURCE").ok()?;
        if raw.trim().is_empty() {
            return None;
        }
        Some(Self::parse(&raw))
    }

    /// Fetch and parse the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the document cannot be read or is not a
    /// JSON array of course records.
    pub async fn load(&self) -> Result<Catalog, CatalogLoadError> {
        let body = self.fetch_text().await?;
        let catalog = parse_catalog(&body)?;
        info!(source = %self, courses = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    async fn fetch_text(&self) -> Result<String, CatalogLoadError> {
        match self {
            Self::File(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| CatalogLoadError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            Self::Url(url) => {
                let response = Client::new().get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(CatalogLoadError::HttpStatus(response.status()));
                }
                Ok(response.text().await?)
            }
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}

/// Parse a catalog document: a JSON array of course records.
///
/// # Errors
///
/// Returns `CatalogLoadError::Parse` for malformed documents.
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogLoadError> {
    let courses: Vec<Course> = serde_json::from_str(json)?;
    Ok(Catalog::new(courses))
}
