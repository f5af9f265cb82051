// Tracking bot - follows the ball with a dead zone and two speeds

use super::Bot;
use crate::config::loader::MAX_AI_SPEED;
use crate::game::geometry::{FIELD_WIDTH, SUB_PX_SIZE};
use crate::game::MatchState;

/// A beatable opponent that chases the ball's vertical centre
///
/// - Holds still while the ball centre is inside the middle half of the paddle
/// - Moves at `base_speed` while the ball is on the player's half
/// - Moves at `urgent_speed` once the ball crosses onto its own half
/// - Has no memory between decisions
pub struct TrackingBot {
    name: String,
    base_speed: i32,
    urgent_speed: i32,
}

impl TrackingBot {
    /// Speeds are in display pixels per frame, clamped to 1..=MAX_AI_SPEED
    pub fn new(base_speed: i32, urgent_speed: i32) -> Self {
        Self {
            name: "Tracker".to_string(),
            base_speed: base_speed.clamp(1, MAX_AI_SPEED) * SUB_PX_SIZE,
            urgent_speed: urgent_speed.clamp(1, MAX_AI_SPEED) * SUB_PX_SIZE,
        }
    }
}

impl Default for TrackingBot {
    fn default() -> Self {
        Self::new(2, 3)
    }
}

impl Bot for TrackingBot {
    fn decide(&mut self, state: &MatchState) -> i32 {
        let ball = &state.ball;
        let paddle = &state.opponent;

        let speed = if ball.x >= FIELD_WIDTH / 2 {
            self.urgent_speed
        } else {
            self.base_speed
        };

        // Compared at 4x scale so the quarter points stay exact integers
        let aim = 4 * (ball.y + ball.height() / 2);
        let upper_quarter = 4 * paddle.y + paddle.height();
        let lower_quarter = 4 * paddle.y + 3 * paddle.height();

        if upper_quarter > aim {
            -speed
        } else if lower_quarter < aim {
            speed
        } else {
            0
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::px;
    use crate::game::state::{BALL_SIZE, PADDLE_HEIGHT};

    fn state_with(ball_x: i32, ball_y: i32, paddle_y: i32) -> MatchState {
        let mut state = MatchState::default();
        state.ball.x = ball_x;
        state.ball.y = ball_y;
        state.opponent.y = paddle_y;
        state
    }

    #[test]
    fn test_moves_down_toward_lower_ball() {
        let mut bot = TrackingBot::default();
        // Paddle spans 0..60, lower quarter at 45, ball centre at 154
        let far = state_with(px(200), px(150), 0);
        let near = state_with(px(40), px(150), 0);
        assert_eq!(bot.decide(&far), 3 * SUB_PX_SIZE);
        assert_eq!(bot.decide(&near), 2 * SUB_PX_SIZE);
    }

    #[test]
    fn test_moves_up_toward_higher_ball() {
        let mut bot = TrackingBot::default();
        let far = state_with(px(128), px(10), px(120));
        let near = state_with(px(127), px(10), px(120));
        assert_eq!(bot.decide(&far), -3 * SUB_PX_SIZE);
        assert_eq!(bot.decide(&near), -2 * SUB_PX_SIZE);
    }

    #[test]
    fn test_holds_inside_dead_zone() {
        let mut bot = TrackingBot::default();
        // Paddle 64..124: quarters at 79 and 109
        for centre in [79, 94, 109] {
            let state = state_with(px(200), px(centre) - BALL_SIZE / 2, px(64));
            assert_eq!(bot.decide(&state), 0, "centre {}", centre);
        }
    }

    #[test]
    fn test_dead_zone_edges_are_exact() {
        let mut bot = TrackingBot::default();
        let upper = px(64) + PADDLE_HEIGHT / 4;
        let just_above = state_with(px(10), upper - BALL_SIZE / 2 - 1, px(64));
        assert_eq!(bot.decide(&just_above), -2 * SUB_PX_SIZE);

        let lower = px(64) + 3 * PADDLE_HEIGHT / 4;
        let just_below = state_with(px(10), lower - BALL_SIZE / 2 + 1, px(64));
        assert_eq!(bot.decide(&just_below), 2 * SUB_PX_SIZE);
    }

    #[test]
    fn test_configured_speeds() {
        let mut bot = TrackingBot::new(1, 5);
        let state = state_with(px(250), px(180), 0);
        assert_eq!(bot.decide(&state), 5 * SUB_PX_SIZE);
        assert_eq!(bot.name(), "Tracker");
    }

    #[test]
    fn test_out_of_range_speeds_are_clamped() {
        let mut bot = TrackingBot::new(-4, 10_000_000);
        let far = state_with(px(250), px(180), 0);
        let near = state_with(px(10), px(180), 0);
        assert_eq!(bot.decide(&far), MAX_AI_SPEED * SUB_PX_SIZE);
        // Never runs away from the ball
        assert_eq!(bot.decide(&near), SUB_PX_SIZE);
    }
}
