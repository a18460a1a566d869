mod catalog;
mod course_modal;
mod shell;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use catalog::{CatalogHandle, CatalogView};
pub use course_modal::CourseModal;
pub use shell::{Shell, TOAST_TTL, use_shell, use_shell_provider};
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::ToastStack;
