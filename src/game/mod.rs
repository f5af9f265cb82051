pub mod driver;
pub mod geometry;
pub mod input;
pub mod object;
pub mod physics;
pub mod state;

pub use driver::{Control, FrameDriver, Phase};
pub use input::{poll_input, Buttons, KeyMap};
pub use object::GameObject;
pub use state::MatchState;
