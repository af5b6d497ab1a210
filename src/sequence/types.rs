//! Sequence duel data structures.
//!
//! Two players take turns reproducing a random sequence of directional
//! symbols. Each player has their own key for every symbol.

use crate::constants::{
    DEFAULT_MAX_ROUNDS, DEFAULT_PRE_TURN_DELAY_MS, DEFAULT_SEQUENCE_LENGTH,
    MISS_FEEDBACK_DELAY_MS,
};
use crate::error::ConfigError;
use crate::input::Key;
use std::collections::HashSet;
use std::time::Duration;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// 1 or 2, as shown in the player tag.
    pub fn number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Tag used in every displayed line, e.g. "P1".
    pub fn tag(&self) -> String {
        format!("P{}", self.number())
    }
}

/// A move in the catalog: identity, glyph, and one key per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: String,
    pub glyph: String,
    pub bindings: [Key; 2],
}

impl Symbol {
    /// Character bindings are folded to lower case so they match presses.
    pub fn new(id: impl Into<String>, glyph: impl Into<String>, p1: Key, p2: Key) -> Self {
        Self {
            id: id.into(),
            glyph: glyph.into(),
            bindings: [p1.normalized(), p2.normalized()],
        }
    }

    pub fn binding_for(&self, player: Player) -> Key {
        self.bindings[player.index()]
    }
}

/// The fixed, ordered set of symbols a sequence is drawn from.
///
/// Built only through [`Catalog::new`] or [`Catalog::from_parallel`], so a
/// catalog in hand is never empty, never has aliased or reserved bindings,
/// and stores every character binding lower-case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    symbols: Vec<Symbol>,
}

impl Catalog {
    pub fn new(mut symbols: Vec<Symbol>) -> Result<Self, ConfigError> {
        if symbols.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        // Symbol fields are public, so records may skip Symbol::new
        for symbol in &mut symbols {
            symbol.bindings = symbol.bindings.map(Key::normalized);
        }
        for player in Player::ALL {
            let mut seen = HashSet::new();
            for symbol in &symbols {
                let key = symbol.binding_for(player);
                if key.is_reserved() {
                    return Err(ConfigError::ReservedKey {
                        player: player.number(),
                        key,
                    });
                }
                if !seen.insert(key) {
                    return Err(ConfigError::DuplicateBinding {
                        player: player.number(),
                        key,
                    });
                }
            }
        }
        Ok(Self { symbols })
    }

    /// Zip the four same-length arrays of a config file into symbol records.
    pub fn from_parallel(
        ids: &[String],
        glyphs: &[String],
        player1_keys: &[Key],
        player2_keys: &[Key],
    ) -> Result<Self, ConfigError> {
        if ids.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let expected = ids.len();
        for (field, found) in [
            ("glyphs", glyphs.len()),
            ("player1_keys", player1_keys.len()),
            ("player2_keys", player2_keys.len()),
        ] {
            if found != expected {
                return Err(ConfigError::LengthMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }

        let symbols = ids
            .iter()
            .zip(glyphs)
            .zip(player1_keys.iter().zip(player2_keys))
            .map(|((id, glyph), (&p1, &p2))| Symbol::new(id.clone(), glyph.clone(), p1, p2))
            .collect();
        Self::new(symbols)
    }

    /// Four arrow directions: WASD for player 1, arrow keys for player 2.
    pub fn arrows() -> Self {
        Self {
            symbols: vec![
                Symbol::new("up", "\u{2191}", Key::Char('w'), Key::Up),
                Symbol::new("down", "\u{2193}", Key::Char('s'), Key::Down),
                Symbol::new("left", "\u{2190}", Key::Char('a'), Key::Left),
                Symbol::new("right", "\u{2192}", Key::Char('d'), Key::Right),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Symbol> {
        self.symbols.get(index)
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Every key the player may press, in catalog order.
    pub fn bindings_for(&self, player: Player) -> Vec<Key> {
        self.symbols.iter().map(|s| s.binding_for(player)).collect()
    }

    /// Catalog index of the symbol the player's key stands for.
    pub fn index_of_binding(&self, player: Player, key: Key) -> Option<usize> {
        self.symbols
            .iter()
            .position(|s| s.binding_for(player) == key)
    }
}

/// Where the engine is in its turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Configured but no game started yet.
    Idle,
    /// Showing "Prepare P{n}..." while the pre-turn delay runs.
    Preparing,
    /// Sequence on screen, player input accepted.
    AwaitingInput,
    /// Showing "P{n}: MISS!" while the feedback delay runs.
    Missed,
    /// All rounds played. Only `start_new_game` leaves this phase.
    Completed,
    /// Configuration was rejected. Only a valid `configure` leaves this phase.
    Disabled,
}

impl TurnPhase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Preparing => "Preparing",
            Self::AwaitingInput => "Your move",
            Self::Missed => "Miss",
            Self::Completed => "Completed",
            Self::Disabled => "Disabled",
        }
    }
}

/// Static tuning for one engine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSettings {
    pub initial_length: usize,
    /// `None` plays forever.
    pub max_rounds: Option<u32>,
    pub pre_turn_delay: Duration,
    pub miss_delay: Duration,
    pub grow_each_turn: bool,
    pub regenerate_on_miss: bool,
    /// Start a game as soon as the engine is built.
    pub start_on_launch: bool,
}

impl SequenceSettings {
    /// Reject values that would leave the engine with nothing to play.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_length == 0 {
            return Err(ConfigError::ZeroSequenceLength);
        }
        if self.max_rounds == Some(0) {
            return Err(ConfigError::ZeroMaxRounds);
        }
        Ok(())
    }
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self {
            initial_length: DEFAULT_SEQUENCE_LENGTH,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            pre_turn_delay: Duration::from_millis(DEFAULT_PRE_TURN_DELAY_MS),
            miss_delay: Duration::from_millis(MISS_FEEDBACK_DELAY_MS),
            grow_each_turn: true,
            regenerate_on_miss: false,
            start_on_launch: false,
        }
    }
}

/// All mutable progression state. Owned and written only by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineState {
    /// Completed rounds (both players finished a turn).
    pub current_round: u32,
    pub max_rounds: Option<u32>,
    pub current_player: Player,
    pub sequence_length: usize,
    /// Cursor into the sequence: the next symbol the player must press.
    pub current_index: usize,
    pub input_enabled: bool,
    pub phase: TurnPhase,
}

impl EngineState {
    pub fn new(sequence_length: usize, max_rounds: Option<u32>) -> Self {
        Self {
            current_round: 0,
            max_rounds,
            current_player: Player::One,
            sequence_length,
            current_index: 0,
            input_enabled: false,
            phase: TurnPhase::Idle,
        }
    }

    pub fn rounds_exhausted(&self) -> bool {
        self.max_rounds
            .is_some_and(|max| self.current_round >= max)
    }
}
