//! The page itself: scroll state, static sections and page assembly.

mod render;
mod state;

pub use render::{Section, SectionKind, build_page, page_height, section_range};
pub use state::ScrollState;
