use thiserror::Error;

use crate::model::CourseId;

/// Errors raised when an operation references something the catalog does not know.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    #[error("chapter {index} is out of range for course {course_id} ({chapter_count} chapters)")]
    ChapterOutOfRange {
        course_id: CourseId,
        index: usize,
        chapter_count: usize,
    },
}
