pub mod render;

pub use render::render_section;
