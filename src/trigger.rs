//! World trigger that starts the minigame.

use crate::display::DisplaySink;
use crate::sequence::TurnSequenceEngine;
use rand::Rng;

/// Starts a new game when something with the right tag enters the zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneTrigger {
    tag: String,
    activated: bool,
}

impl ZoneTrigger {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            activated: false,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the minigame has been revealed by an entry.
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Handle an entry into the zone. Returns true if a game was started.
    pub fn on_enter<D: DisplaySink, R: Rng>(
        &mut self,
        other_tag: &str,
        engine: &mut TurnSequenceEngine<D, R>,
    ) -> bool {
        if other_tag != self.tag {
            return false;
        }
        tracing::info!(tag = other_tag, "entered minigame zone");
        self.activated = true;
        engine.start_new_game();
        true
    }
}
