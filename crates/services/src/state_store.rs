use std::sync::Arc;

use course_core::model::{Favorites, ProgressMap};
use storage::repository::{KeyValueRepository, StorageError, StorageKey};
use storage::snapshot;
use tracing::{debug, warn};

use crate::Clock;

/// User data restored at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersistedState {
    pub favorites: Favorites,
    pub progress: ProgressMap,
}

/// Reads and writes favorites/progress through the snapshot codec.
///
/// Loading never fails: missing, unreadable, or corrupt entries come back as
/// empty defaults. Saving writes the whole structure every time.
#[derive(Clone)]
pub struct StateStore {
    clock: Clock,
    entries: Arc<dyn KeyValueRepository>,
}

impl StateStore {
    #[must_use]
    pub fn new(clock: Clock, entries: Arc<dyn KeyValueRepository>) -> Self {
        Self { clock, entries }
    }

    pub async fn load(&self) -> PersistedState {
        let favorites_raw = self.read(StorageKey::Favorites).await;
        let progress_raw = self.read(StorageKey::Progress).await;
        PersistedState {
            favorites: snapshot::decode_or_default(StorageKey::Favorites, favorites_raw.as_deref()),
            progress: snapshot::decode_or_default(StorageKey::Progress, progress_raw.as_deref()),
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be encoded or written.
    pub async fn save_favorites(&self, favorites: &Favorites) -> Result<(), StorageError> {
        let raw = snapshot::encode(favorites, self.clock.now())?;
        self.entries.put(StorageKey::Favorites, &raw).await?;
        debug!(count = favorites.len(), "favorites saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `StorageError` if the snapshot cannot be encoded or written.
    pub async fn save_progress(&self, progress: &ProgressMap) -> Result<(), StorageError> {
        let raw = snapshot::encode(progress, self.clock.now())?;
        self.entries.put(StorageKey::Progress, &raw).await?;
        debug!(courses = progress.len(), "progress saved");
        Ok(())
    }

    async fn read(&self, key: StorageKey) -> Option<String> {
        match self.entries.get(key).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!(key = %key, error = %err, "stored value unavailable; using default");
                None
            }
        }
    }
}
