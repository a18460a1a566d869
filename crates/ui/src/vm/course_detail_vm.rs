use course_core::model::{CourseId, ProgressEntry};
use services::CourseView;

use super::course_card_vm::level_class;

/// One chapter row in the detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterRowVm {
    pub index: usize,
    pub title: String,
    pub completed: bool,
}

/// UI-ready representation of the course detail modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub level_class: &'static str,
    pub level_label: &'static str,
    pub language_badge: String,
    pub percent: u8,
    pub progress_label: String,
    pub is_complete: bool,
    pub is_favorite: bool,
    pub favorite_label: &'static str,
    pub chapters: Vec<ChapterRowVm>,
}

#[must_use]
pub fn map_course_detail(view: &CourseView) -> CourseDetailVm {
    let course = &view.course;
    let progress = &view.progress;
    let chapters = course
        .chapters()
        .iter()
        .enumerate()
        .map(|(index, title)| ChapterRowVm {
            index,
            title: title.clone(),
            completed: progress.is_chapter_completed(index),
        })
        .collect();

    CourseDetailVm {
        id: course.id(),
        title: course.title().to_owned(),
        description: course.description().to_owned(),
        level_class: level_class(course.level()),
        level_label: course.level().label(),
        language_badge: course.language().to_uppercase(),
        percent: progress.percent(),
        progress_label: progress_label(progress),
        is_complete: progress.is_complete(),
        is_favorite: view.is_favorite,
        favorite_label: favorite_label(view.is_favorite),
        chapters,
    }
}

fn progress_label(progress: &ProgressEntry) -> String {
    if progress.is_complete() {
        "🎉 100%".to_string()
    } else {
        format!("{}%", progress.percent())
    }
}

fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        "❤️ Remove from favorites"
    } else {
        "🤍 Add to favorites"
    }
}
