use super::geometry::{px, FIELD_HEIGHT, FIELD_WIDTH};
use super::object::GameObject;

pub const BALL_SIZE: i32 = px(8);
pub const PADDLE_WIDTH: i32 = px(8);
pub const PADDLE_HEIGHT: i32 = px(60);
pub const PLAYER_X: i32 = px(16);
pub const OPPONENT_X: i32 = px(232);
pub const PADDLE_START_Y: i32 = px(64);

/// Default post-score pause, in rendered frames (3 seconds at 60 Hz)
pub const DEFAULT_SERVE_WAIT: u32 = 180;

/// Which side of the table an event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human player, left paddle
    Player,
    /// AI opponent, right paddle
    Opponent,
}

/// Everything the simulation mutates: the three objects, scores, and the serve pause.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub ball: GameObject,
    pub player: GameObject,
    pub opponent: GameObject,
    pub score_player: u32,
    pub score_opponent: u32,
    /// Frames left before the ball moves again
    pub wait_time: u32,
    /// Text shown while the ball waits to be served
    pub message: String,
    serve_wait: u32,
}

impl MatchState {
    pub fn new(serve_wait: u32) -> Self {
        let (ball_x, ball_y) = ball_center();
        Self {
            ball: GameObject::new(ball_x, ball_y, BALL_SIZE, BALL_SIZE),
            player: GameObject::new(PLAYER_X, PADDLE_START_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            opponent: GameObject::new(OPPONENT_X, PADDLE_START_Y, PADDLE_WIDTH, PADDLE_HEIGHT),
            score_player: 0,
            score_opponent: 0,
            wait_time: serve_wait,
            message: String::new(),
            serve_wait,
        }
    }

    /// Recenter and stop the ball, refresh the score message and re-arm the wait.
    ///
    /// The serve direction is chosen on the next substep, so calling this twice
    /// leaves the ball exactly as calling it once.
    pub fn reset_ball(&mut self) {
        let (x, y) = ball_center();
        self.ball.x = x;
        self.ball.y = y;
        self.ball.vx = 0;
        self.ball.vy = 0;
        self.message = format!("score {} - {}", self.score_player, self.score_opponent);
        self.wait_time = self.serve_wait;
    }

    /// Credit a point and serve again
    pub fn score(&mut self, side: Side) {
        match side {
            Side::Player => self.score_player += 1,
            Side::Opponent => self.score_opponent += 1,
        }
        self.reset_ball();
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new(DEFAULT_SERVE_WAIT)
    }
}

fn ball_center() -> (i32, i32) {
    (FIELD_WIDTH / 2 - BALL_SIZE / 2, FIELD_HEIGHT / 2 - BALL_SIZE / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_layout() {
        let state = MatchState::default();
        assert_eq!(state.ball.x, px(124));
        assert_eq!(state.ball.y, px(92));
        assert_eq!((state.ball.vx, state.ball.vy), (0, 0));
        assert_eq!(state.player.x, px(16));
        assert_eq!(state.opponent.x, px(232));
        assert_eq!((state.score_player, state.score_opponent), (0, 0));
    }

    #[test]
    fn test_reset_ball_recenters_and_arms_wait() {
        let mut state = MatchState::new(42);
        state.wait_time = 0;
        state.ball.x = -5;
        state.ball.y = px(3);
        state.ball.vx = 700;
        state.ball.vy = -300;

        state.reset_ball();

        assert_eq!(state.ball.x, FIELD_WIDTH / 2 - BALL_SIZE / 2);
        assert_eq!(state.ball.y, FIELD_HEIGHT / 2 - BALL_SIZE / 2);
        assert_eq!((state.ball.vx, state.ball.vy), (0, 0));
        assert_eq!(state.wait_time, 42);
        assert_eq!(state.message, "score 0 - 0");
    }

    #[test]
    fn test_reset_ball_is_idempotent() {
        let mut once = MatchState::default();
        once.ball.vx = 512;
        once.reset_ball();

        let mut twice = once.clone();
        twice.reset_ball();

        assert_eq!(once.ball, twice.ball);
        assert_eq!(once.wait_time, twice.wait_time);
        assert_eq!(once.message, twice.message);
    }

    #[test]
    fn test_score_credits_one_side() {
        let mut state = MatchState::default();
        state.score(Side::Opponent);
        state.score(Side::Opponent);
        state.score(Side::Player);
        assert_eq!(state.score_player, 1);
        assert_eq!(state.score_opponent, 2);
        assert_eq!(state.message, "score 1 - 2");
    }
}
