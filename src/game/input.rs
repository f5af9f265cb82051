use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;

use super::geometry::SUB_PX_SIZE;

/// Player paddle speed while a button is held, sub-pixel units per frame
pub const PLAYER_SPEED: i32 = 2 * SUB_PX_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
}

/// Input delivered to the frame driver.
/// `Begin` and `Quit` are edges; press/release carry held state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Quit,
    Begin,
    Press(Button),
    Release(Button),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Hold {
    #[default]
    Released,
    Held,
    /// Terminal can't report releases: held for this many more frames
    Latched(u32),
}

impl Hold {
    fn is_down(self) -> bool {
        !matches!(self, Hold::Released)
    }
}

/// Held up/down state, mapped to a paddle velocity once per frame
#[derive(Debug, Clone, Default)]
pub struct Buttons {
    up: Hold,
    down: Hold,
    latch_frames: Option<u32>,
}

impl Buttons {
    /// `latch_frames` is `None` when the terminal reports key releases
    pub fn new(latch_frames: Option<u32>) -> Self {
        Self {
            up: Hold::Released,
            down: Hold::Released,
            latch_frames,
        }
    }

    pub fn press(&mut self, button: Button) {
        let hold = match self.latch_frames {
            Some(frames) => {
                // Without release events a new direction replaces the old one
                *self.slot(opposite(button)) = Hold::Released;
                Hold::Latched(frames)
            }
            None => Hold::Held,
        };
        *self.slot(button) = hold;
    }

    pub fn release(&mut self, button: Button) {
        *self.slot(button) = Hold::Released;
    }

    /// Age latched presses by one frame
    pub fn tick(&mut self) {
        for hold in [&mut self.up, &mut self.down] {
            if let Hold::Latched(frames) = *hold {
                *hold = if frames > 1 {
                    Hold::Latched(frames - 1)
                } else {
                    Hold::Released
                };
            }
        }
    }

    pub fn is_held(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up.is_down(),
            Button::Down => self.down.is_down(),
        }
    }

    /// Both or neither held means no movement
    pub fn velocity(&self) -> i32 {
        match (self.is_held(Button::Up), self.is_held(Button::Down)) {
            (true, false) => -PLAYER_SPEED,
            (false, true) => PLAYER_SPEED,
            _ => 0,
        }
    }

    fn slot(&mut self, button: Button) -> &mut Hold {
        match button {
            Button::Up => &mut self.up,
            Button::Down => &mut self.down,
        }
    }
}

fn opposite(button: Button) -> Button {
    match button {
        Button::Up => Button::Down,
        Button::Down => Button::Up,
    }
}

/// Resolved key bindings
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    up: Vec<KeyCode>,
    down: Vec<KeyCode>,
    begin: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl KeyMap {
    pub fn from_bindings(bindings: &KeyBindings) -> Self {
        Self {
            up: parse_keys(&bindings.paddle_up),
            down: parse_keys(&bindings.paddle_down),
            begin: parse_keys(&bindings.begin),
            quit: parse_keys(&bindings.quit),
        }
    }

    /// Translate one key event. Repeats count as presses so latches stay fresh.
    pub fn translate(&self, key: KeyEvent) -> Option<InputAction> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputAction::Quit);
        }

        let code = normalize(key.code);
        let button = if self.up.contains(&code) {
            Some(Button::Up)
        } else if self.down.contains(&code) {
            Some(Button::Down)
        } else {
            None
        };

        match (key.kind, button) {
            (KeyEventKind::Press | KeyEventKind::Repeat, Some(button)) => {
                Some(InputAction::Press(button))
            }
            (KeyEventKind::Release, Some(button)) => Some(InputAction::Release(button)),
            (KeyEventKind::Press, None) if self.quit.contains(&code) => Some(InputAction::Quit),
            (KeyEventKind::Press, None) if self.begin.contains(&code) => Some(InputAction::Begin),
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_bindings(&KeyBindings::default())
    }
}

/// Parse a key name such as "W", "Up", "Space" or "Esc"
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let code = match name.trim().to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

fn parse_keys(names: &[String]) -> Vec<KeyCode> {
    names
        .iter()
        .filter_map(|name| {
            let code = parse_key(name);
            if code.is_none() {
                tracing::warn!("Ignoring unknown key binding {:?}", name);
            }
            code
        })
        .collect()
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Drain all pending terminal events without blocking
pub fn poll_input(keymap: &KeyMap) -> Result<Vec<InputAction>, io::Error> {
    let mut actions = Vec::new();

    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            if let Some(action) = keymap.translate(key) {
                actions.push(action);
            }
        }
    }

    Ok(actions)
}
