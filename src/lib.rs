//! Sequence Duel - two-player "repeat the sequence" minigame.
//!
//! This module exposes the engine, its boundary interfaces and the config
//! layer for testing and embedding. The terminal front end lives in the
//! binary.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod input;
pub mod logging;
pub mod sequence;
pub mod trigger;

pub use config::GameConfig;
pub use error::{ConfigError, LoadError};
pub use sequence::{InputOutcome, TurnSequenceEngine};
