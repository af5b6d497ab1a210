//! Key bindings and the per-tick input source.
//!
//! The engine never reads the terminal directly. It asks an [`InputSource`]
//! whether one of the active player's bindings was pressed since the last
//! tick. [`KeyQueue`] is the terminal-backed source: main.rs pushes crossterm
//! key events into it and the engine drains it once per frame.

use crate::error::KeyParseError;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// A physical key a player can bind to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    /// A printable character, always stored lower-case.
    Char(char),
}

/// Keys the front end keeps for itself. Enter fires the trigger (Esc quits
/// and has no [`Key`] at all), so neither player may bind them.
pub const RESERVED_KEYS: [Key; 1] = [Key::Enter];

impl Key {
    /// The same key with any character folded to lower case, the form
    /// [`key_from_code`] reports presses in.
    pub fn normalized(self) -> Self {
        match self {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        }
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_KEYS.contains(self)
    }

    /// Short label used in the controls hint.
    pub fn label(&self) -> String {
        match self {
            Key::Up => "\u{2191}".to_string(),
            Key::Down => "\u{2193}".to_string(),
            Key::Left => "\u{2190}".to_string(),
            Key::Right => "\u{2192}".to_string(),
            Key::Enter => "Enter".to_string(),
            Key::Space => "Space".to_string(),
            Key::Char(c) => c.to_ascii_uppercase().to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Enter => write!(f, "Enter"),
            Key::Space => write!(f, "Space"),
            Key::Char(c) => write!(f, "{}", c),
        }
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if !c.is_whitespace() {
                return Ok(Key::Char(c.to_ascii_lowercase()));
            }
        }
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Key::Up),
            "down" => Ok(Key::Down),
            "left" => Ok(Key::Left),
            "right" => Ok(Key::Right),
            "enter" => Ok(Key::Enter),
            "space" => Ok(Key::Space),
            _ => Err(KeyParseError(s.to_string())),
        }
    }
}

impl TryFrom<String> for Key {
    type Error = KeyParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.to_string()
    }
}

/// Map a terminal key code to a bindable key, if it is one.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        _ => None,
    }
}

/// Non-blocking, edge-triggered query for bound keys.
pub trait InputSource {
    /// Return a key from `allowed` that was pressed since the last call.
    ///
    /// Must not block. A single physical press is reported at most once.
    fn pressed_among(&mut self, allowed: &[Key]) -> Option<Key>;
}

/// Presses collected between two engine ticks.
#[derive(Debug, Clone, Default)]
pub struct KeyQueue {
    presses: VecDeque<Key>,
}

impl KeyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: Key) {
        self.presses.push_back(key);
    }

    /// Record a terminal key event. Releases and repeats are dropped so
    /// holding a key never counts as more than one press.
    pub fn push_event(&mut self, event: KeyEvent) {
        if event.kind != KeyEventKind::Press {
            return;
        }
        if let Some(key) = key_from_code(event.code) {
            self.push(key);
        }
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    pub fn clear(&mut self) {
        self.presses.clear();
    }
}

impl InputSource for KeyQueue {
    /// Reports the earliest allowed press and drops everything queued
    /// before it. Later presses stay queued for the next tick.
    fn pressed_among(&mut self, allowed: &[Key]) -> Option<Key> {
        while let Some(key) = self.presses.pop_front() {
            if allowed.contains(&key) {
                return Some(key);
            }
        }
        None
    }
}
