//! Sequence duel minigame.
//!
//! A turn-based "repeat the sequence" game for two players. Each turn the
//! active player sees a row of directional glyphs and must press their own
//! key for each one, in order. A wrong key is a miss and the turn restarts;
//! finishing the row hands the turn to the other player. Two finished turns
//! make a round, and the game ends after the configured number of rounds.

pub mod logic;
pub mod timer;
pub mod types;

pub use logic::*;
pub use timer::{Transition, TransitionTimer};
pub use types::*;
