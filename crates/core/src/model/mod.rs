mod content;
mod course;
mod favorites;
mod filter;
mod ids;
mod progress;
mod theme;

pub use content::ChapterContent;
pub use ids::{CourseId, ParseIdError};

pub use course::{Catalog, Course, Level};
pub use favorites::Favorites;
pub use filter::{CourseFilter, FilterMode, matches};
pub use progress::{GlobalProgress, ProgressEntry, ProgressMap, completion_percent};
pub use theme::ThemePreference;
