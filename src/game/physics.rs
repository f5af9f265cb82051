use rand::Rng;

use super::geometry::{FIELD_HEIGHT, FIELD_WIDTH, MAX_BALL_SPEED, SUB_PX_SIZE};
use super::object::{intersects, GameObject};
use super::state::{MatchState, Side};

/// What happened during one substep
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub paddle_collision: bool,
    pub wall_collision: bool,
    pub goal_scored: Option<Side>,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.paddle_collision || self.wall_collision || self.goal_scored.is_some()
    }
}

/// Run one fixed-point physics substep.
///
/// Must be called `STEPS_PER_FRAME` times per rendered frame. The random
/// source only picks serve directions for a motionless ball.
pub fn advance_one_substep<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();

    arm_ball(&mut state.ball, rng);
    clamp_ball_speed(&mut state.ball);

    for paddle in [&mut state.player, &mut state.opponent] {
        paddle.integrate();
        paddle.clamp_y(FIELD_HEIGHT);
    }

    // Frozen ball: nothing below can happen to it
    if state.wait_time > 0 {
        return events;
    }
    state.ball.integrate();

    if let Some(side) = scoring_side(&state.ball) {
        state.score(side);
        events.goal_scored = Some(side);
        return events;
    }

    events.wall_collision = bounce_off_walls(&mut state.ball);
    events.paddle_collision = bounce_off_paddles(state);

    events
}

/// Give each zero velocity component a random-sign unit speed
fn arm_ball<R: Rng + ?Sized>(ball: &mut GameObject, rng: &mut R) {
    if ball.vx == 0 {
        ball.vx = random_unit(rng);
    }
    if ball.vy == 0 {
        ball.vy = random_unit(rng);
    }
}

fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    if rng.gen_bool(0.5) {
        -SUB_PX_SIZE
    } else {
        SUB_PX_SIZE
    }
}

fn clamp_ball_speed(ball: &mut GameObject) {
    ball.vx = ball.vx.clamp(-MAX_BALL_SPEED, MAX_BALL_SPEED);
    ball.vy = ball.vy.clamp(-MAX_BALL_SPEED, MAX_BALL_SPEED);
}

/// Left exit credits the opponent, right exit credits the player
fn scoring_side(ball: &GameObject) -> Option<Side> {
    if ball.x < 0 {
        Some(Side::Opponent)
    } else if ball.x + ball.width() > FIELD_WIDTH {
        Some(Side::Player)
    } else {
        None
    }
}

fn bounce_off_walls(ball: &mut GameObject) -> bool {
    if ball.y < 0 {
        ball.vy = -ball.vy;
        ball.y = 0;
        true
    } else if ball.y + ball.height() > FIELD_HEIGHT {
        ball.vy = -ball.vy;
        ball.y = FIELD_HEIGHT - ball.height();
        true
    } else {
        false
    }
}

/// Only the paddle the ball is travelling toward is checked.
/// A hit reflects and speeds the ball up, then parks it flush against the paddle face.
fn bounce_off_paddles(state: &mut MatchState) -> bool {
    let ball = &mut state.ball;

    if ball.vx < 0 {
        let paddle = &state.player;
        // Ball must not have slipped behind the paddle's back face
        if ball.x >= paddle.x && intersects(paddle, ball) {
            speed_up_vertical(ball);
            ball.vx = -ball.vx + SUB_PX_SIZE;
            ball.x = paddle.x + paddle.width();
            return true;
        }
    } else if ball.vx > 0 {
        let paddle = &state.opponent;
        if ball.x + ball.width() <= paddle.x + paddle.width() && intersects(paddle, ball) {
            speed_up_vertical(ball);
            ball.vx = -ball.vx - SUB_PX_SIZE;
            ball.x = paddle.x - ball.width();
            return true;
        }
    }

    false
}

/// Push vertical speed one unit further from zero
fn speed_up_vertical(ball: &mut GameObject) {
    ball.vy += if ball.vy > 0 { SUB_PX_SIZE } else { -SUB_PX_SIZE };
}
