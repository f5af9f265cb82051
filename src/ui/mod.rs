pub mod braille;
pub mod font;
pub mod overlay;
pub mod render;

pub use overlay::OverlayMessage;
pub use render::{render, render_instructions};
