//! File-backed game configuration.
//!
//! The config file mirrors an editor-style layout: four parallel arrays for
//! the catalog plus scalar tuning knobs. [`GameConfig::validate`] is the one
//! place those arrays are checked and zipped into a [`Catalog`].

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_MAX_ROUNDS, DEFAULT_PRE_TURN_DELAY_MS, DEFAULT_SEQUENCE_LENGTH,
    DEFAULT_TRIGGER_TAG, MISS_FEEDBACK_DELAY_MS,
};
use crate::error::{ConfigError, LoadError};
use crate::input::Key;
use crate::sequence::{Catalog, SequenceSettings};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Game configuration as stored on disk. Missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub sequence_length: usize,
    pub pre_turn_delay_ms: u64,
    pub miss_delay_ms: u64,
    pub grow_each_turn: bool,
    pub regenerate_on_miss: bool,
    /// `None` (JSON `null`) plays without a round cap.
    pub max_rounds: Option<u32>,
    pub start_on_launch: bool,
    /// Tag the zone trigger reacts to.
    pub trigger_tag: String,
    /// Symbol identities, in catalog order.
    pub catalog: Vec<String>,
    pub glyphs: Vec<String>,
    pub player1_keys: Vec<Key>,
    pub player2_keys: Vec<Key>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let arrows = Catalog::arrows();
        Self {
            sequence_length: DEFAULT_SEQUENCE_LENGTH,
            pre_turn_delay_ms: DEFAULT_PRE_TURN_DELAY_MS,
            miss_delay_ms: MISS_FEEDBACK_DELAY_MS,
            grow_each_turn: true,
            regenerate_on_miss: false,
            max_rounds: Some(DEFAULT_MAX_ROUNDS),
            start_on_launch: false,
            trigger_tag: DEFAULT_TRIGGER_TAG.to_string(),
            catalog: arrows.symbols().iter().map(|s| s.id.clone()).collect(),
            glyphs: arrows.symbols().iter().map(|s| s.glyph.clone()).collect(),
            player1_keys: arrows.symbols().iter().map(|s| s.bindings[0]).collect(),
            player2_keys: arrows.symbols().iter().map(|s| s.bindings[1]).collect(),
        }
    }
}

impl GameConfig {
    /// Check the configuration and split it into engine inputs.
    pub fn validate(&self) -> Result<(Catalog, SequenceSettings), ConfigError> {
        let catalog = Catalog::from_parallel(
            &self.catalog,
            &self.glyphs,
            &self.player1_keys,
            &self.player2_keys,
        )?;
        let settings = SequenceSettings {
            initial_length: self.sequence_length,
            max_rounds: self.max_rounds,
            pre_turn_delay: Duration::from_millis(self.pre_turn_delay_ms),
            miss_delay: Duration::from_millis(self.miss_delay_ms),
            grow_each_turn: self.grow_each_turn,
            regenerate_on_miss: self.regenerate_on_miss,
            start_on_launch: self.start_on_launch,
        };
        settings.validate()?;
        Ok((catalog, settings))
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, LoadError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Write this configuration as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, json)
    }
}

/// Platform directories for this game.
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "sequence-duel")
}

/// Location of the default config file.
pub fn default_config_path() -> Result<PathBuf, LoadError> {
    let dirs = project_dirs().ok_or(LoadError::NoConfigDir)?;
    Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
}
