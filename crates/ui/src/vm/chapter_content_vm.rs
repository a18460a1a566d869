use course_core::model::ChapterContent;

use super::markdown_vm::markdown_to_html;

/// Rendered reading pane for an opened chapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterContentVm {
    pub index: usize,
    pub badge: String,
    pub title: String,
    pub html: String,
}

#[must_use]
pub fn build_chapter_content(title: &str, index: usize) -> ChapterContentVm {
    let content = ChapterContent::placeholder(title, index);
    ChapterContentVm {
        index: content.index(),
        badge: content.badge_label(),
        title: content.title().to_owned(),
        html: markdown_to_html(content.markdown()),
    }
}
