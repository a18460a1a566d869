use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::ids::CourseId;

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty tier advertised on a course card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// Stable identifier, matching the catalog document.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Human-facing badge label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// A catalog entry with an ordered sequence of chapters.
///
/// Courses are read-only for the whole session; the catalog document is the
/// source of truth for chapter counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    language: String,
    level: Level,
    chapters: Vec<String>,
}

impl Course {
    #[must_use]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        language: impl Into<String>,
        level: Level,
        chapters: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            language: language.into(),
            level,
            chapters,
        }
    }

    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn chapters(&self) -> &[String] {
        &self.chapters
    }

    #[must_use]
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }

    /// Title of the chapter at `index`, if it exists.
    #[must_use]
    pub fn chapter(&self, index: usize) -> Option<&str> {
        self.chapters.get(index).map(String::as_str)
    }
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

/// The full course list loaded at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Looks up a course by id. The first match wins if the document repeats an id.
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|course| course.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Distinct language codes in first-seen order.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for course in &self.courses {
            if !seen.contains(&course.language()) {
                seen.push(course.language());
            }
        }
        seen
    }

    #[must_use]
    pub fn total_chapters(&self) -> usize {
        self.courses.iter().map(Course::chapter_count).sum()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
