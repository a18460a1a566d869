use std::sync::Arc;

use course_core::model::ThemePreference;
use storage::repository::{KeyValueRepository, StorageError, StorageKey};
use tracing::warn;

/// Loads and persists the light/dark preference.
#[derive(Clone)]
pub struct ThemeService {
    entries: Arc<dyn KeyValueRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(entries: Arc<dyn KeyValueRepository>) -> Self {
        Self { entries }
    }

    /// Stored preference, or light when missing or unreadable.
    pub async fn load(&self) -> ThemePreference {
        match self.entries.get(StorageKey::Theme).await {
            Ok(Some(raw)) => ThemePreference::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "unknown theme preference; using light");
                ThemePreference::default()
            }),
            Ok(None) => ThemePreference::default(),
            Err(err) => {
                warn!(error = %err, "theme preference unavailable; using light");
                ThemePreference::default()
            }
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    pub async fn save(&self, theme: ThemePreference) -> Result<(), StorageError> {
        self.entries.put(StorageKey::Theme, theme.as_str()).await
    }

    /// Flip the preference and persist it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the preference cannot be written.
    pub async fn toggle(&self, current: ThemePreference) -> Result<ThemePreference, StorageError> {
        let next = current.toggled();
        self.save(next).await?;
        Ok(next)
    }
}
