//! Error types for configuration loading and validation.

use crate::input::Key;
use std::path::PathBuf;
use thiserror::Error;

/// A configuration that cannot drive the engine.
///
/// Raised once, when the configuration is applied. The engine never
/// produces these while a game is running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The symbol catalog has no entries.
    #[error("symbol catalog is empty")]
    EmptyCatalog,

    /// One of the per-symbol arrays does not match the catalog length.
    #[error("{field} has {found} entries but the catalog has {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    /// A sequence must contain at least one symbol.
    #[error("sequence length must be at least 1")]
    ZeroSequenceLength,

    /// A round cap of zero would finish the game before it starts.
    #[error("max rounds must be at least 1 (use null for unlimited)")]
    ZeroMaxRounds,

    /// Two symbols share the same key for one player.
    #[error("player {player} binds {key} to more than one symbol")]
    DuplicateBinding { player: u8, key: Key },

    /// A binding uses a key the front end keeps for itself.
    #[error("player {player} binds {key}, which is reserved")]
    ReservedKey { player: u8, key: Key },
}

/// Failure to obtain a usable configuration from disk.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// A key name in a config file that does not map to any [`Key`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown key name: {0:?}")]
pub struct KeyParseError(pub String);
