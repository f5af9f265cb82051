use rand::rngs::StdRng;

use crate::ai::Bot;

use super::geometry::STEPS_PER_FRAME;
use super::input::{Buttons, InputAction};
use super::physics::{advance_one_substep, PhysicsEvents};
use super::state::{MatchState, Side};

/// Match lifecycle. There is no way back from `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Instructions screen, no physics
    NotStarted,
    Playing,
}

/// Whether the loop should keep going after an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Owns the match and runs it one rendered frame at a time
pub struct FrameDriver {
    state: MatchState,
    phase: Phase,
    buttons: Buttons,
    bot: Box<dyn Bot>,
    rng: StdRng,
}

impl FrameDriver {
    pub fn new(state: MatchState, buttons: Buttons, bot: Box<dyn Bot>, rng: StdRng) -> Self {
        Self {
            state,
            phase: Phase::NotStarted,
            buttons,
            bot,
            rng,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn bot_name(&self) -> &str {
        self.bot.name()
    }

    /// Apply one input event
    pub fn handle(&mut self, action: InputAction) -> Control {
        match action {
            InputAction::Quit => return Control::Quit,
            InputAction::Begin => self.begin(),
            InputAction::Press(button) => self.buttons.press(button),
            InputAction::Release(button) => self.buttons.release(button),
        }
        Control::Continue
    }

    /// Start the match. Only the first call has any effect.
    pub fn begin(&mut self) {
        if self.phase == Phase::Playing {
            return;
        }
        self.phase = Phase::Playing;
        self.state.reset_ball();
        tracing::info!("Match started against {}", self.bot.name());
    }

    /// Advance one rendered frame: all substeps, then the wait countdown.
    /// Returns the combined physics events for the frame.
    ///
    /// The player's buttons become a paddle velocity once per frame. The bot
    /// is asked again before every substep, so the opponent reacts at the
    /// physics rate rather than the frame rate.
    pub fn run_frame(&mut self) -> PhysicsEvents {
        let mut frame_events = PhysicsEvents::default();

        if self.phase == Phase::Playing {
            self.state.player.vy = self.buttons.velocity();

            for _ in 0..STEPS_PER_FRAME {
                self.state.opponent.vy = self.bot.decide(&self.state);
                let events = advance_one_substep(&mut self.state, &mut self.rng);
                merge(&mut frame_events, events);
            }

            if let Some(side) = frame_events.goal_scored {
                let scorer = match side {
                    Side::Player => "Player",
                    Side::Opponent => "Opponent",
                };
                tracing::info!(
                    "{} scored, {} - {}",
                    scorer,
                    self.state.score_player,
                    self.state.score_opponent
                );
            }

            self.state.wait_time = self.state.wait_time.saturating_sub(1);
        }

        self.buttons.tick();
        frame_events
    }
}

fn merge(frame: &mut PhysicsEvents, step: PhysicsEvents) {
    frame.paddle_collision |= step.paddle_collision;
    frame.wall_collision |= step.wall_collision;
    if step.goal_scored.is_some() {
        frame.goal_scored = step.goal_scored;
    }
}
