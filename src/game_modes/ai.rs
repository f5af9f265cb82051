use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use ratatui::Terminal;

use crate::ai;
use crate::config::{Config, KeyBindings};
use crate::game::{poll_input, Buttons, Control, FrameDriver, KeyMap, MatchState, Phase};
use crate::ui::{self, OverlayMessage};

use super::common::{frame_duration, limit_frame_rate};

/// Run the single-player match against the AI until the player quits
///
/// `release_events` tells whether the terminal reports key releases; without
/// them, presses latch for `display.latch_frames` frames.
pub fn run_game_vs_ai<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    seed: u64,
    release_events: bool,
) -> anyhow::Result<()> {
    tracing::info!("Single player vs AI, serve seed {}", seed);

    let keymap = KeyMap::from_bindings(&config.keybindings);
    let latch_frames = if release_events {
        None
    } else {
        Some(config.display.latch_frames.max(1))
    };

    let mut driver = FrameDriver::new(
        MatchState::new(config.physics.serve_wait_frames),
        Buttons::new(latch_frames),
        ai::create_bot(&config.ai),
        StdRng::seed_from_u64(seed),
    );

    let instructions = instructions(&config.keybindings, driver.bot_name());
    let frame = frame_duration(config.display.target_fps);

    loop {
        let now = Instant::now();

        let actions = poll_input(&keymap).context("reading terminal input")?;
        for action in actions {
            if driver.handle(action) == Control::Quit {
                let state = driver.state();
                tracing::info!(
                    "Quit with score {} - {}",
                    state.score_player,
                    state.score_opponent
                );
                return Ok(());
            }
        }

        let events = driver.run_frame();
        if events.any() {
            let ball = &driver.state().ball;
            tracing::debug!("{:?}, ball velocity ({}, {})", events, ball.vx, ball.vy);
        }

        terminal
            .draw(|f| match driver.phase() {
                Phase::NotStarted => {
                    ui::render_instructions(f, driver.state(), &config.display, &instructions)
                }
                Phase::Playing => ui::render(f, driver.state(), &config.display),
            })
            .context("drawing frame")?;

        limit_frame_rate(now, frame);
    }
}

/// Controls box for the pre-match screen, built from the configured bindings
fn instructions(bindings: &KeyBindings, bot_name: &str) -> OverlayMessage {
    OverlayMessage::new(vec![
        format!(
            "Hold {} / {} to move",
            bindings.paddle_up.join(" or "),
            bindings.paddle_down.join(" or ")
        ),
        String::new(),
        format!("{} to begin", bindings.begin.join(" or ")),
        format!("{} to quit", bindings.quit.join(" or ")),
        String::new(),
        format!("Opponent: {}", bot_name),
    ])
    .with_title("Fixpong".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructions_list_bindings() {
        let message = instructions(&KeyBindings::default(), "Tracker");
        assert_eq!(message.lines[0], "Hold W or Up / S or Down to move");
        assert_eq!(message.lines[2], "Space or Enter to begin");
        assert_eq!(message.lines[3], "Esc or Q to quit");
        assert_eq!(message.lines[5], "Opponent: Tracker");
        assert_eq!(message.title.as_deref(), Some("Fixpong"));
    }
}
