#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod state;
pub mod time;

pub use error::CatalogError;
pub use state::{CatalogState, ChapterToggle};
pub use time::Clock;
