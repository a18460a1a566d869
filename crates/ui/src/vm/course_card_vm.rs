use course_core::model::{CourseId, Level};
use services::CourseView;

/// UI-ready representation of a course in the catalog grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub language_badge: String,
    pub level_class: &'static str,
    pub level_label: &'static str,
    pub percent: u8,
    pub percent_label: String,
    pub is_favorite: bool,
}

/// Convert filtered course views into grid cards, preserving order.
#[must_use]
pub fn map_course_cards(views: &[CourseView]) -> Vec<CourseCardVm> {
    views.iter().map(map_course_card).collect()
}

fn map_course_card(view: &CourseView) -> CourseCardVm {
    let course = &view.course;
    let percent = view.progress.percent();
    CourseCardVm {
        id: course.id(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        language_badge: course.language().to_uppercase(),
        level_class: level_class(course.level()),
        level_label: course.level().label(),
        percent,
        percent_label: format!("{percent}% complete"),
        is_favorite: view.is_favorite,
    }
}

pub(crate) fn level_class(level: Level) -> &'static str {
    match level {
        Level::Beginner => "level level-beginner",
        Level::Intermediate => "level level-intermediate",
        Level::Advanced => "level level-advanced",
    }
}
