//! Index rendering for the Simple Repository API

mod html;
mod render;

pub use html::IndexEntry;
pub use html::write_project_index;
pub use html::write_root_index;
pub use render::render_all;
pub use render::render_project_index;
pub use render::render_root_index;
