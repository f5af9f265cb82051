// Fixpong configuration types
// Every section falls back to its defaults so partial files are fine

use serde::{Deserialize, Serialize};

use crate::game::state::DEFAULT_SERVE_WAIT;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AIConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Player paddle controls (held)
    pub paddle_up: Vec<String>,
    pub paddle_down: Vec<String>,

    // Start the match from the instructions screen
    pub begin: Vec<String>,

    pub quit: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            paddle_up: vec!["W".to_string(), "Up".to_string()],
            paddle_down: vec!["S".to_string(), "Down".to_string()],
            begin: vec!["Space".to_string(), "Enter".to_string()],
            quit: vec!["Esc".to_string(), "Q".to_string()],
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Frames the ball stays frozen after every serve
    pub serve_wait_frames: u32,

    // Fixed seed for the serve directions (random when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            serve_wait_frames: DEFAULT_SERVE_WAIT,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AIConfig {
    // Opponent speed in pixels per frame while the ball is on the player's half
    pub base_speed: i32,

    // Opponent speed once the ball is on its own half
    pub urgent_speed: i32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            base_speed: 2,
            urgent_speed: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Frames a key press counts as held when the terminal can't report releases
    pub latch_frames: u32,

    // Colors (RGB values 0-255)
    pub ball_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub text_color: [u8; 3],
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            latch_frames: 30,
            ball_color: [255, 255, 255],        // White
            paddle_color: [255, 255, 255],      // White
            text_color: [255, 255, 255],        // White
            center_line_color: [100, 100, 100], // Gray
        }
    }
}
