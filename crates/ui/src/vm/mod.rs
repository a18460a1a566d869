mod chapter_content_vm;
mod course_card_vm;
mod course_detail_vm;
mod filter_vm;
mod markdown_vm;
mod toast_vm;

pub use chapter_content_vm::{ChapterContentVm, build_chapter_content};
pub use course_card_vm::{CourseCardVm, map_course_cards};
pub use course_detail_vm::{ChapterRowVm, CourseDetailVm, map_course_detail};
pub use filter_vm::{FilterOptionVm, build_filter_options};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use toast_vm::ToastVm;
