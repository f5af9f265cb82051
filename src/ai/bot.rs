// Bot trait for AI opponents

use crate::game::MatchState;

/// Trait for AI paddle controllers
///
/// A bot reads the match and returns the velocity it wants for the opponent
/// paddle. It is consulted before every physics substep while the match is
/// being played.
pub trait Bot {
    /// Decide the opponent paddle's vertical velocity (sub-pixel units per frame)
    fn decide(&mut self, state: &MatchState) -> i32;

    /// Bot name for debugging/display
    fn name(&self) -> &str;
}
