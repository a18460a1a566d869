use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::model::course::Course;
use crate::model::favorites::Favorites;

/// Which slice of the catalog to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    /// Courses whose language field equals this code exactly.
    Language(String),
    Favorites,
}

impl FilterMode {
    /// Key used by filter buttons: `all`, `favorites`, or the language code.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            FilterMode::All => "all",
            FilterMode::Language(code) => code,
            FilterMode::Favorites => "favorites",
        }
    }

    #[must_use]
    pub fn accepts(&self, course: &Course, favorites: &Favorites) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Language(code) => course.language() == code,
            FilterMode::Favorites => favorites.contains(course.id()),
        }
    }
}

impl FromStr for FilterMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "all" => FilterMode::All,
            "favorites" => FilterMode::Favorites,
            code => FilterMode::Language(code.to_string()),
        })
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Search text plus filter mode, with the search normalized once up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    needle: String,
    mode: FilterMode,
}

impl CourseFilter {
    #[must_use]
    pub fn new(search: &str, mode: FilterMode) -> Self {
        Self {
            needle: search.to_lowercase(),
            mode,
        }
    }

    #[must_use]
    pub fn mode(&self) -> &FilterMode {
        &self.mode
    }

    #[must_use]
    pub fn matches(&self, course: &Course, favorites: &Favorites) -> bool {
        self.matches_text(course) && self.mode.accepts(course, favorites)
    }

    fn matches_text(&self, course: &Course) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        course.title().to_lowercase().contains(&self.needle)
            || course.description().to_lowercase().contains(&self.needle)
    }
}

/// Case-insensitive search over title/description AND the filter mode.
#[must_use]
pub fn matches(course: &Course, search: &str, mode: &FilterMode, favorites: &Favorites) -> bool {
    CourseFilter::new(search, mode.clone()).matches(course, favorites)
}
