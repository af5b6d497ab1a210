//! Terminal rendering for the sequence duel.

pub mod sequence_scene;

use rand::Rng;
use ratatui::Frame;
use sequence_duel::display::TextPanel;
use sequence_duel::sequence::TurnSequenceEngine;
use sequence_duel::trigger::ZoneTrigger;

/// Draw the whole screen for one frame.
pub fn draw_ui<R: Rng>(
    frame: &mut Frame,
    engine: &TurnSequenceEngine<TextPanel, R>,
    trigger: &ZoneTrigger,
) {
    let area = frame.size();
    sequence_scene::render_sequence_scene(frame, area, engine, trigger);
}
