use course_core::model::{
    Catalog, Course, CourseFilter, CourseId, Favorites, FilterMode, GlobalProgress, ProgressEntry,
};
use course_core::{CatalogState, ChapterToggle};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::catalog_source::CatalogSource;
use crate::error::{CatalogLoadError, CatalogServiceError};
use crate::notifications::Notification;
use crate::state_store::StateStore;
use storage::repository::StorageError;

/// A course together with the user's data about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseView {
    pub course: Course,
    pub progress: ProgressEntry,
    pub is_favorite: bool,
}

/// Result of a chapter checkbox toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterOutcome {
    pub progress: ProgressEntry,
    pub global: GlobalProgress,
    pub notification: Option<Notification>,
}

/// Result of a favorite toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FavoriteOutcome {
    pub is_favorite: bool,
    pub notification: Notification,
}

/// Session-scoped controller over catalog state with write-through persistence.
///
/// Mutations are staged on a copy of the state, written to storage, and only
/// then committed. The lock is held across the write so mutations never
/// interleave.
pub struct CatalogService {
    store: StateStore,
    state: Mutex<CatalogState>,
}

impl CatalogService {
    /// Build the session from an already loaded catalog and the persisted user data.
    pub async fn open(catalog: Catalog, store: StateStore) -> Self {
        let persisted = store.load().await;
        info!(
            courses = catalog.len(),
            favorites = persisted.favorites.len(),
            tracked = persisted.progress.len(),
            "catalog session opened"
        );
        let state = CatalogState::new(catalog, persisted.favorites, persisted.progress);
        Self {
            store,
            state: Mutex::new(state),
        }
    }

    /// Load the catalog from `source`, then open the session.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError` if the catalog cannot be fetched or parsed.
    pub async fn load(source: &CatalogSource, store: StateStore) -> Result<Self, CatalogLoadError> {
        let catalog = source.load().await?;
        Ok(Self::open(catalog, store).await)
    }

    /// Courses matching `search` and `mode`, in catalog order.
    pub async fn search(&self, search: &str, mode: FilterMode) -> Vec<CourseView> {
        let state = self.state.lock().await;
        let filter = CourseFilter::new(search, mode);
        state
            .filter(&filter)
            .into_iter()
            .map(|course| view_of(&state, course))
            .collect()
    }

    /// Distinct language codes offered as filters.
    pub async fn languages(&self) -> Vec<String> {
        let state = self.state.lock().await;
        state
            .catalog()
            .languages()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    /// Course plus its progress and favorite flag, for the detail view.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` if the course is unknown.
    pub async fn course(&self, id: CourseId) -> Result<CourseView, CatalogServiceError> {
        let state = self.state.lock().await;
        let course = state.course(id)?;
        Ok(view_of(&state, course))
    }

    /// Mark or unmark a chapter and persist the progress map.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Catalog` for unknown courses or
    /// out-of-range chapters, and `CatalogServiceError::Storage` if the write
    /// fails. In every error case the in-memory state is unchanged.
    pub async fn toggle_chapter(
        &self,
        course_id: CourseId,
        chapter_index: usize,
        complete: bool,
    ) -> Result<ChapterOutcome, CatalogServiceError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let ChapterToggle {
            entry,
            completed_course,
            ..
        } = next.toggle_chapter(course_id, chapter_index, complete)?;

        self.store.save_progress(next.progress()).await?;

        let notification = if completed_course {
            let title = next.course(course_id)?.title().to_owned();
            info!(course = %course_id, "course completed");
            Some(Notification::CourseCompleted { title })
        } else {
            None
        };
        debug!(
            course = %course_id,
            chapter = chapter_index,
            complete,
            percent = entry.percent(),
            "chapter toggled"
        );

        *state = next;
        Ok(ChapterOutcome {
            progress: entry,
            global: state.global_progress(),
            notification,
        })
    }

    /// Stored progress or the zero default. Never fails.
    pub async fn course_progress(&self, id: CourseId) -> ProgressEntry {
        self.state.lock().await.course_progress(id)
    }

    pub async fn global_progress(&self) -> GlobalProgress {
        self.state.lock().await.global_progress()
    }

    /// Flip favorite membership and persist the favorites set.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails; the set is then unchanged.
    pub async fn toggle_favorite(&self, id: CourseId) -> Result<FavoriteOutcome, StorageError> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let is_favorite = next.toggle_favorite(id);

        self.store.save_favorites(next.favorites()).await?;
        debug!(course = %id, is_favorite, "favorite toggled");

        *state = next;
        let notification = if is_favorite {
            Notification::FavoriteAdded
        } else {
            Notification::FavoriteRemoved
        };
        Ok(FavoriteOutcome {
            is_favorite,
            notification,
        })
    }

    pub async fn favorites(&self) -> Favorites {
        self.state.lock().await.favorites().clone()
    }
}

fn view_of(state: &CatalogState, course: &Course) -> CourseView {
    CourseView {
        course: course.clone(),
        progress: state.course_progress(course.id()),
        is_favorite: state.is_favorite(course.id()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use async_trait::async_trait;
    use course_core::CatalogError;
    use course_core::model::Level;
    use course_core::time::fixed_clock;
    use storage::repository::{InMemoryRepository, KeyValueRepository, StorageKey};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course::new(
                CourseId::new(1),
                "Rust",
                "Systems",
                "rust",
                Level::Beginner,
                vec!["a".into(), "b".into()],
            ),
            Course::new(
                CourseId::new(2),
                "Go",
                "Services",
                "go",
                Level::Advanced,
                vec!["c".into()],
            ),
        ])
    }

    async fn service(repo: Arc<dyn KeyValueRepository>) -> CatalogService {
        CatalogService::open(catalog(), StateStore::new(fixed_clock(), repo)).await
    }

    struct ReadOnlyRepo {
        inner: InMemoryRepository,
    }

    #[async_trait]
    impl KeyValueRepository for ReadOnlyRepo {
        async fn get(&self, key: StorageKey) -> Result<Option<String>, StorageError> {
            self.inner.get(key).await
        }

        async fn put(&self, _key: StorageKey, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Connection("read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn completing_last_chapter_notifies_once() {
        let svc = service(Arc::new(InMemoryRepository::new())).await;
        let id = CourseId::new(2);

        let first = svc.toggle_chapter(id, 0, true).await.unwrap();
        assert_eq!(first.progress.percent(), 100);
        assert_eq!(
            first.notification,
            Some(Notification::CourseCompleted { title: "Go".into() })
        );

        let again = svc.toggle_chapter(id, 0, true).await.unwrap();
        assert_eq!(again.notification, None);

        let undone = svc.toggle_chapter(id, 0, false).await.unwrap();
        assert_eq!(undone.progress.percent(), 0);
        assert_eq!(undone.notification, None);
    }

    #[tokio::test]
    async fn toggles_are_written_through() {
        let repo = InMemoryRepository::new();
        let svc = service(Arc::new(repo.clone())).await;

        svc.toggle_chapter(CourseId::new(1), 1, true).await.unwrap();
        svc.toggle_favorite(CourseId::new(1)).await.unwrap();

        assert!(repo.get(StorageKey::Progress).await.unwrap().is_some());
        assert!(repo.get(StorageKey::Favorites).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn failed_write_leaves_state_unchanged() {
        let svc = service(Arc::new(ReadOnlyRepo {
            inner: InMemoryRepository::new(),
        }))
        .await;

        let err = svc.toggle_chapter(CourseId::new(1), 0, true).await.unwrap_err();
        assert!(matches!(err, CatalogServiceError::Storage(_)));
        assert_eq!(svc.course_progress(CourseId::new(1)).await, ProgressEntry::default());

        assert!(svc.toggle_favorite(CourseId::new(1)).await.is_err());
        assert!(svc.favorites().await.is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_course_and_bad_index() {
        let svc = service(Arc::new(InMemoryRepository::new())).await;

        let err = svc.toggle_chapter(CourseId::new(7), 0, true).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogServiceError::Catalog(CatalogError::UnknownCourse(_))
        ));

        let err = svc.toggle_chapter(CourseId::new(1), 5, true).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogServiceError::Catalog(CatalogError::ChapterOutOfRange { .. })
        ));

        assert!(svc.course(CourseId::new(7)).await.is_err());
    }

    #[tokio::test]
    async fn favorite_toggle_reports_notifications() {
        let svc = service(Arc::new(InMemoryRepository::new())).await;
        let added = svc.toggle_favorite(CourseId::new(2)).await.unwrap();
        assert!(added.is_favorite);
        assert_eq!(added.notification, Notification::FavoriteAdded);

        let removed = svc.toggle_favorite(CourseId::new(2)).await.unwrap();
        assert!(!removed.is_favorite);
        assert_eq!(removed.notification, Notification::FavoriteRemoved);
    }

    #[tokio::test]
    async fn search_attaches_progress_and_favorites() {
        let svc = service(Arc::new(InMemoryRepository::new())).await;
        svc.toggle_chapter(CourseId::new(1), 0, true).await.unwrap();
        svc.toggle_favorite(CourseId::new(1)).await.unwrap();

        let views = svc.search("SYS", FilterMode::All).await;
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].progress.percent(), 50);
        assert!(views[0].is_favorite);

        assert_eq!(svc.languages().await, vec!["rust".to_string(), "go".to_string()]);
    }
}
