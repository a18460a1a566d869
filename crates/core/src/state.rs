//! Session state: the loaded catalog plus the user's favorites and progress.
//!
//! Everything here is pure and synchronous. Persistence is layered on top by
//! the services crate, which stages mutations on a clone and commits after a
//! successful write.

use std::sync::Arc;

use crate::error::CatalogError;
use crate::model::{
    Catalog, Course, CourseFilter, CourseId, Favorites, GlobalProgress, ProgressEntry, ProgressMap,
};

/// Result of marking or unmarking a chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterToggle {
    pub course_id: CourseId,
    pub entry: ProgressEntry,
    /// True only when this call completed a chapter and brought the course to 100%.
    pub completed_course: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    catalog: Arc<Catalog>,
    favorites: Favorites,
    progress: ProgressMap,
}

impl CatalogState {
    /// Builds state from a freshly loaded catalog and persisted user data.
    ///
    /// Progress for known courses is reconciled against the catalog's chapter
    /// counts; entries for courses the catalog no longer lists are kept as-is.
    #[must_use]
    pub fn new(catalog: Catalog, favorites: Favorites, mut progress: ProgressMap) -> Self {
        for course in catalog.courses() {
            if let Some(entry) = progress.get_mut(course.id()) {
                entry.reconcile(course.chapter_count());
            }
        }
        Self {
            catalog: Arc::new(catalog),
            favorites,
            progress,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCourse` if the id is not in the catalog.
    pub fn course(&self, id: CourseId) -> Result<&Course, CatalogError> {
        self.catalog.get(id).ok_or(CatalogError::UnknownCourse(id))
    }

    /// Marks (`complete = true`) or unmarks a chapter.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownCourse` for ids missing from the catalog and
    /// `CatalogError::ChapterOutOfRange` when `index` is not a valid chapter.
    /// State is untouched on error.
    pub fn toggle_chapter(
        &mut self,
        course_id: CourseId,
        index: usize,
        complete: bool,
    ) -> Result<ChapterToggle, CatalogError> {
        let chapter_count = self.course(course_id)?.chapter_count();
        if index >= chapter_count {
            return Err(CatalogError::ChapterOutOfRange {
                course_id,
                index,
                chapter_count,
            });
        }

        let entry = self.progress.entry_mut(course_id);
        let changed = entry.set_chapter(index, complete, chapter_count);
        let completed_course = complete && changed && entry.is_complete();

        Ok(ChapterToggle {
            course_id,
            entry: entry.clone(),
            completed_course,
        })
    }

    /// Stored progress for a course, or the zero default. Never fails.
    #[must_use]
    pub fn course_progress(&self, id: CourseId) -> ProgressEntry {
        self.progress.get(id).cloned().unwrap_or_default()
    }

    /// Sums completed and total chapters over the loaded catalog.
    #[must_use]
    pub fn global_progress(&self) -> GlobalProgress {
        self.catalog
            .courses()
            .iter()
            .fold(GlobalProgress::default(), |acc, course| {
                let done = self
                    .progress
                    .get(course.id())
                    .map_or(0, ProgressEntry::completed_count);
                GlobalProgress {
                    done: acc.done + done,
                    total: acc.total + course.chapter_count(),
                }
            })
    }

    /// Flips favorite membership; returns the new state.
    pub fn toggle_favorite(&mut self, id: CourseId) -> bool {
        self.favorites.toggle(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: CourseId) -> bool {
        self.favorites.contains(id)
    }

    /// Courses accepted by `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.catalog
            .courses()
            .iter()
            .filter(|course| filter.matches(course, &self.favorites))
            .collect()
    }
}
