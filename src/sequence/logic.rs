//! Sequence duel turn logic.
//!
//! Handles sequence generation, turn alternation, input validation, miss
//! recovery and round counting. Time only moves through [`TurnSequenceEngine::update`],
//! so the whole game can be driven deterministically from tests.

use super::timer::{Transition, TransitionTimer};
use super::types::{Catalog, EngineState, Player, SequenceSettings, TurnPhase};
use crate::config::GameConfig;
use crate::constants::{COMPLETION_TEXT, IDLE_TEXT, SEQUENCE_MARKER};
use crate::display::DisplaySink;
use crate::error::ConfigError;
use crate::input::{InputSource, Key};
use rand::Rng;
use std::time::Duration;

/// What a single press did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not the active player's key, or input is not being accepted.
    Ignored,
    /// Correct key; `index` is the new cursor position.
    Advanced { index: usize },
    /// Correct key for the last symbol. The next turn is being prepared.
    TurnComplete,
    /// One of the player's keys, but not the expected one.
    Missed,
}

/// Banner shown while a player gets ready.
pub fn format_prepare(player: Player) -> String {
    format!("Prepare {}...", player.tag())
}

/// Banner shown after a wrong key.
pub fn format_miss(player: Player) -> String {
    format!("{}: MISS!", player.tag())
}

/// The player tag followed by the glyphs still to be pressed.
pub fn format_sequence<'a>(player: Player, glyphs: impl IntoIterator<Item = &'a str>) -> String {
    let glyphs: Vec<&str> = glyphs.into_iter().collect();
    format!("{} {} {}", player.tag(), SEQUENCE_MARKER, glyphs.join(" "))
}

/// Two-player "repeat the sequence" engine.
///
/// Owns the only [`EngineState`]. Every change to the phase, the active
/// player or the cursor produces exactly one write to the display sink.
pub struct TurnSequenceEngine<D: DisplaySink, R: Rng> {
    catalog: Catalog,
    settings: SequenceSettings,
    state: EngineState,
    /// Catalog indices. Only replaced between turns.
    sequence: Vec<usize>,
    timer: TransitionTimer,
    display: D,
    rng: R,
}

impl<D: DisplaySink, R: Rng> TurnSequenceEngine<D, R> {
    pub fn new(
        catalog: Catalog,
        settings: SequenceSettings,
        display: D,
        rng: R,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let state = EngineState::new(settings.initial_length, settings.max_rounds);
        let mut engine = Self {
            catalog,
            settings,
            state,
            sequence: Vec::new(),
            timer: TransitionTimer::new(),
            display,
            rng,
        };
        if engine.settings.start_on_launch {
            engine.start_new_game();
        }
        Ok(engine)
    }

    pub fn from_config(config: &GameConfig, display: D, rng: R) -> Result<Self, ConfigError> {
        let (catalog, settings) = config.validate()?;
        Self::new(catalog, settings, display, rng)
    }

    /// Replace the catalog and settings.
    ///
    /// A rejected configuration disables the engine until a valid one is
    /// applied. A valid one resets the engine to Idle and shows the idle text,
    /// or starts a new game straight away when `start_on_launch` is set.
    pub fn configure(&mut self, config: &GameConfig) -> Result<(), ConfigError> {
        self.timer.cancel();
        match config.validate() {
            Ok((catalog, settings)) => {
                self.state = EngineState::new(settings.initial_length, settings.max_rounds);
                self.sequence.clear();
                self.catalog = catalog;
                self.settings = settings;
                tracing::debug!(symbols = self.catalog.len(), "engine configured");
                if self.settings.start_on_launch {
                    self.start_new_game();
                } else {
                    self.display.set_text(IDLE_TEXT);
                }
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "configuration rejected, disabling engine");
                self.state.input_enabled = false;
                self.state.phase = TurnPhase::Disabled;
                self.display.set_text(&format!("Minigame disabled: {}", err));
                Err(err)
            }
        }
    }

    /// Reset to round 0 with player 1 and begin preparing the first turn.
    ///
    /// Supersedes any game in progress, including its pending delays.
    pub fn start_new_game(&mut self) {
        if self.state.phase == TurnPhase::Disabled {
            tracing::warn!("start_new_game ignored: engine is disabled");
            return;
        }
        if let Some(stale) = self.timer.cancel() {
            tracing::debug!(?stale, "cancelled pending transition");
        }
        self.state = EngineState::new(self.settings.initial_length, self.settings.max_rounds);
        self.sequence.clear();
        tracing::info!(
            max_rounds = ?self.settings.max_rounds,
            length = self.settings.initial_length,
            "new game"
        );
        self.begin_turn(true);
    }

    /// Per-frame driver.
    ///
    /// Spends `delta` on the pending delay (running any transitions that come
    /// due), then, if a sequence is on screen, polls `input` for one of the
    /// active player's keys. A sequence presented during this tick takes
    /// input from the next tick on.
    pub fn update(
        &mut self,
        delta: Duration,
        input: &mut impl InputSource,
    ) -> Option<InputOutcome> {
        if self.state.phase == TurnPhase::Disabled {
            return None;
        }

        let mut budget = delta;
        let mut presented = false;
        while let Some(transition) = self.timer.advance(&mut budget) {
            presented |= matches!(transition, Transition::Present { .. });
            self.run(transition);
        }

        if presented || !self.accepting_input() {
            return None;
        }
        let allowed = self.catalog.bindings_for(self.state.current_player);
        let pressed = input.pressed_among(&allowed)?;
        Some(self.resolve(pressed))
    }

    /// Feed a single key press directly.
    pub fn on_input(&mut self, key: Key) -> InputOutcome {
        if !self.accepting_input() {
            return InputOutcome::Ignored;
        }
        if self
            .catalog
            .index_of_binding(self.state.current_player, key)
            .is_none()
        {
            return InputOutcome::Ignored;
        }
        self.resolve(key)
    }

    /// The key the active player must press next, while input is accepted.
    pub fn required_key(&self) -> Option<Key> {
        if !self.accepting_input() {
            return None;
        }
        let symbol = self.sequence.get(self.state.current_index)?;
        self.catalog
            .get(*symbol)
            .map(|s| s.binding_for(self.state.current_player))
    }

    /// Text for the symbols still to be pressed, tagged with the player.
    pub fn remaining_text(&self) -> String {
        let start = self.state.current_index.min(self.sequence.len());
        format_sequence(
            self.state.current_player,
            self.sequence[start..]
                .iter()
                .filter_map(|&i| self.catalog.get(i))
                .map(|s| s.glyph.as_str()),
        )
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &SequenceSettings {
        &self.settings
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Time left before the pending transition runs.
    pub fn pending_delay(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase == TurnPhase::Completed
    }

    fn accepting_input(&self) -> bool {
        self.state.input_enabled
            && self.state.phase == TurnPhase::AwaitingInput
            && !self.sequence.is_empty()
    }

    fn run(&mut self, transition: Transition) {
        match transition {
            Transition::BeginTurn { regenerate } => self.begin_turn(regenerate),
            Transition::Present { regenerate } => self.present(regenerate),
        }
    }

    fn begin_turn(&mut self, regenerate: bool) {
        self.state.input_enabled = false;

        if self.state.rounds_exhausted() {
            self.timer.cancel();
            self.state.phase = TurnPhase::Completed;
            tracing::info!(rounds = self.state.current_round, "minigame complete");
            self.display.set_text(COMPLETION_TEXT);
            return;
        }

        self.state.phase = TurnPhase::Preparing;
        self.display
            .set_text(&format_prepare(self.state.current_player));
        self.timer
            .schedule(self.settings.pre_turn_delay, Transition::Present { regenerate });
    }

    fn present(&mut self, regenerate: bool) {
        if regenerate || self.sequence.is_empty() {
            self.generate_sequence();
        }
        self.state.current_index = 0;
        self.state.phase = TurnPhase::AwaitingInput;
        self.state.input_enabled = true;
        tracing::debug!(
            player = self.state.current_player.number(),
            sequence = ?self.sequence,
            "sequence presented"
        );
        self.render_remaining();
    }

    fn generate_sequence(&mut self) {
        let symbols = self.catalog.len();
        let rng = &mut self.rng;
        self.sequence = (0..self.state.sequence_length)
            .map(|_| rng.gen_range(0..symbols))
            .collect();
    }

    fn render_remaining(&mut self) {
        let text = self.remaining_text();
        self.display.set_text(&text);
    }

    /// Judge a press that belongs to the active player's binding set.
    fn resolve(&mut self, pressed: Key) -> InputOutcome {
        let Some(required) = self.required_key() else {
            return InputOutcome::Ignored;
        };

        if pressed != required {
            self.miss();
            return InputOutcome::Missed;
        }

        self.state.current_index += 1;
        if self.state.current_index >= self.sequence.len() {
            self.complete_turn();
            InputOutcome::TurnComplete
        } else {
            self.render_remaining();
            InputOutcome::Advanced {
                index: self.state.current_index,
            }
        }
    }

    fn complete_turn(&mut self) {
        self.state.input_enabled = false;
        let finished = self.state.current_player;
        self.state.current_player = finished.other();

        // A round is one turn by each player
        if self.state.current_player == Player::One {
            self.state.current_round += 1;
            tracing::info!(round = self.state.current_round, "round complete");
        }
        if self.settings.grow_each_turn {
            self.state.sequence_length += 1;
        }
        tracing::info!(
            player = finished.number(),
            next_length = self.state.sequence_length,
            "turn complete"
        );

        self.begin_turn(true);
    }

    fn miss(&mut self) {
        self.state.input_enabled = false;
        self.state.phase = TurnPhase::Missed;
        tracing::debug!(
            player = self.state.current_player.number(),
            index = self.state.current_index,
            "miss"
        );
        self.display
            .set_text(&format_miss(self.state.current_player));
        self.timer.schedule(
            self.settings.miss_delay,
            Transition::BeginTurn {
                regenerate: self.settings.regenerate_on_miss,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyQueue;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    type TestEngine = TurnSequenceEngine<Vec<String>, ChaCha8Rng>;

    const W: Key = Key::Char('w');
    const S: Key = Key::Char('s');
    const A: Key = Key::Char('a');

    fn settings() -> SequenceSettings {
        SequenceSettings {
            initial_length: 2,
            max_rounds: Some(1),
            pre_turn_delay: Duration::from_millis(700),
            miss_delay: Duration::from_millis(1000),
            grow_each_turn: false,
            regenerate_on_miss: false,
            start_on_launch: false,
        }
    }

    fn engine_with(settings: SequenceSettings) -> TestEngine {
        TurnSequenceEngine::new(
            Catalog::arrows(),
            settings,
            Vec::new(),
            ChaCha8Rng::seed_from_u64(42),
        )
        .unwrap()
    }

    fn elapse(engine: &mut TestEngine, ms: u64) {
        engine.update(Duration::from_millis(ms), &mut KeyQueue::new());
    }

    /// Start a game whose first sequence is `sequence` instead of a random draw.
    fn start_with(engine: &mut TestEngine, sequence: Vec<usize>) {
        engine.start_new_game();
        engine.sequence = sequence;
        engine.timer.schedule(
            engine.settings.pre_turn_delay,
            Transition::Present { regenerate: false },
        );
    }

    fn play_turn(engine: &mut TestEngine) {
        loop {
            let key = engine.required_key().expect("input should be accepted");
            if engine.on_input(key) == InputOutcome::TurnComplete {
                return;
            }
        }
    }

    fn last_text(engine: &TestEngine) -> &str {
        engine.display().last().map(String::as_str).unwrap_or("")
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = engine_with(settings());
        assert_eq!(engine.state().phase, TurnPhase::Idle);
        assert!(engine.display().is_empty());
        assert!(engine.sequence().is_empty());
        assert_eq!(engine.pending_delay(), None);
    }

    #[test]
    fn test_start_on_launch() {
        let engine = engine_with(SequenceSettings {
            start_on_launch: true,
            ..settings()
        });
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
        assert_eq!(engine.display(), &vec!["Prepare P1...".to_string()]);
    }

    #[test]
    fn test_presents_after_prepare_delay() {
        let mut engine = engine_with(settings());
        engine.start_new_game();
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
        assert!(!engine.state().input_enabled);

        elapse(&mut engine, 699);
        assert_eq!(engine.state().phase, TurnPhase::Preparing);

        elapse(&mut engine, 1);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);
        assert!(engine.state().input_enabled);
        assert_eq!(engine.sequence().len(), 2);
        assert!(engine.sequence().iter().all(|&i| i < 4));
        assert_eq!(engine.display().len(), 2);
        assert_eq!(last_text(&engine), engine.remaining_text());
    }

    #[test]
    fn test_large_delta_runs_chained_transitions() {
        let mut engine = engine_with(settings());
        engine.start_new_game();
        elapse(&mut engine, 5000);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);
    }

    #[test]
    fn test_two_player_game_to_completion() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);
        assert_eq!(last_text(&engine), "P1 \u{25B6} \u{2191} \u{2193}");

        assert_eq!(engine.on_input(W), InputOutcome::Advanced { index: 1 });
        assert_eq!(last_text(&engine), "P1 \u{25B6} \u{2193}");

        assert_eq!(engine.on_input(S), InputOutcome::TurnComplete);
        assert_eq!(last_text(&engine), "Prepare P2...");
        assert_eq!(engine.state().current_player, Player::Two);
        assert_eq!(engine.state().current_round, 0);
        assert_eq!(
            engine.display()[..4],
            [
                "Prepare P1...".to_string(),
                "P1 \u{25B6} \u{2191} \u{2193}".to_string(),
                "P1 \u{25B6} \u{2193}".to_string(),
                "Prepare P2...".to_string(),
            ]
        );

        elapse(&mut engine, 700);
        assert!(last_text(&engine).starts_with("P2 \u{25B6} "));
        play_turn(&mut engine);

        assert_eq!(engine.state().current_round, 1);
        assert_eq!(engine.state().current_player, Player::One);
        assert!(engine.is_finished());
        assert_eq!(last_text(&engine), "Minigame Conclu\u{ED}do!");
        assert_eq!(engine.pending_delay(), None);

        // Finished: no more ticks or presses are consumed
        let writes = engine.display().len();
        let mut queue = KeyQueue::new();
        queue.push(W);
        assert_eq!(engine.update(Duration::from_secs(5), &mut queue), None);
        assert_eq!(engine.on_input(W), InputOutcome::Ignored);
        assert_eq!(engine.display().len(), writes);
    }

    #[test]
    fn test_miss_replays_same_sequence() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);

        assert_eq!(engine.on_input(A), InputOutcome::Missed);
        assert_eq!(last_text(&engine), "P1: MISS!");
        assert_eq!(engine.state().phase, TurnPhase::Missed);
        assert!(!engine.state().input_enabled);

        elapse(&mut engine, 999);
        assert_eq!(last_text(&engine), "P1: MISS!");
        elapse(&mut engine, 1);
        assert_eq!(last_text(&engine), "Prepare P1...");

        elapse(&mut engine, 700);
        assert_eq!(engine.sequence(), &[0, 1]);
        assert_eq!(engine.state().current_index, 0);
        assert_eq!(last_text(&engine), "P1 \u{25B6} \u{2191} \u{2193}");
    }

    #[test]
    fn test_miss_mid_sequence_resets_cursor() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);
        engine.on_input(W);
        assert_eq!(engine.state().current_index, 1);

        assert_eq!(engine.on_input(W), InputOutcome::Missed);
        elapse(&mut engine, 1700);
        assert_eq!(engine.state().current_index, 0);
        assert_eq!(engine.state().current_player, Player::One);
        assert_eq!(engine.sequence(), &[0, 1]);
    }

    #[test]
    fn test_miss_regenerates_when_configured() {
        let mut engine = engine_with(SequenceSettings {
            initial_length: 12,
            regenerate_on_miss: true,
            ..settings()
        });
        engine.start_new_game();
        elapse(&mut engine, 700);
        let before = engine.sequence().to_vec();

        let wrong = engine
            .catalog()
            .bindings_for(Player::One)
            .into_iter()
            .find(|&k| Some(k) != engine.required_key())
            .unwrap();
        assert_eq!(engine.on_input(wrong), InputOutcome::Missed);
        elapse(&mut engine, 1700);

        assert_eq!(engine.sequence().len(), 12);
        assert_ne!(engine.sequence(), before.as_slice());
    }

    #[test]
    fn test_other_players_keys_are_ignored() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);
        let writes = engine.display().len();

        assert_eq!(engine.on_input(Key::Up), InputOutcome::Ignored);
        assert_eq!(engine.on_input(Key::Char('x')), InputOutcome::Ignored);
        assert_eq!(engine.state().current_index, 0);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);
        assert_eq!(engine.display().len(), writes);
    }

    #[test]
    fn test_input_ignored_while_preparing() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        assert_eq!(engine.on_input(W), InputOutcome::Ignored);
        assert_eq!(engine.required_key(), None);
        assert_eq!(engine.state().current_index, 0);
    }

    #[test]
    fn test_update_polls_active_player_bindings() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);

        let mut queue = KeyQueue::new();
        queue.push(Key::Up); // player 2's key, skipped
        queue.push(W);
        assert_eq!(
            engine.update(Duration::from_millis(16), &mut queue),
            Some(InputOutcome::Advanced { index: 1 })
        );
        assert_eq!(engine.update(Duration::from_millis(16), &mut queue), None);
    }

    #[test]
    fn test_new_game_supersedes_pending_miss() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);
        engine.on_input(A);
        assert_eq!(engine.state().phase, TurnPhase::Missed);

        engine.start_new_game();
        assert_eq!(engine.pending_delay(), Some(Duration::from_millis(700)));
        elapse(&mut engine, 700);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);

        // The cancelled miss continuation never comes back
        let writes = engine.display().len();
        elapse(&mut engine, 10_000);
        assert_eq!(engine.display().len(), writes);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);
    }

    #[test]
    fn test_start_new_game_resets_progress() {
        let mut engine = engine_with(SequenceSettings {
            max_rounds: Some(3),
            grow_each_turn: true,
            ..settings()
        });
        engine.start_new_game();
        elapse(&mut engine, 700);
        play_turn(&mut engine);
        elapse(&mut engine, 700);
        play_turn(&mut engine);
        assert_eq!(engine.state().current_round, 1);
        assert_eq!(engine.state().sequence_length, 4);

        engine.start_new_game();
        engine.start_new_game();
        assert_eq!(engine.state().current_round, 0);
        assert_eq!(engine.state().current_player, Player::One);
        assert_eq!(engine.state().sequence_length, 2);
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
    }

    #[test]
    fn test_growth_adds_one_per_completed_turn() {
        let mut engine = engine_with(SequenceSettings {
            max_rounds: Some(5),
            grow_each_turn: true,
            ..settings()
        });
        engine.start_new_game();
        for turn in 0..6 {
            elapse(&mut engine, 700);
            assert_eq!(engine.sequence().len(), 2 + turn);
            play_turn(&mut engine);
        }
    }

    #[test]
    fn test_misses_never_count_rounds() {
        let mut engine = engine_with(SequenceSettings {
            max_rounds: Some(2),
            ..settings()
        });
        start_with(&mut engine, vec![3, 3]);
        elapse(&mut engine, 700);
        for _ in 0..3 {
            assert_eq!(engine.on_input(W), InputOutcome::Missed);
            elapse(&mut engine, 1700);
        }
        assert_eq!(engine.state().current_round, 0);
        assert_eq!(engine.state().current_player, Player::One);
        assert_eq!(engine.state().sequence_length, 2);
    }

    #[test]
    fn test_unlimited_rounds_never_complete() {
        let mut engine = engine_with(SequenceSettings {
            max_rounds: None,
            ..settings()
        });
        engine.start_new_game();
        for _ in 0..20 {
            elapse(&mut engine, 700);
            play_turn(&mut engine);
        }
        assert_eq!(engine.state().current_round, 10);
        assert!(!engine.is_finished());
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
    }

    #[test]
    fn test_invalid_configure_disables_engine() {
        let mut engine = engine_with(settings());
        engine.start_new_game();

        let bad = GameConfig {
            glyphs: vec!["x".to_string()],
            ..GameConfig::default()
        };
        let err = engine.configure(&bad).unwrap_err();
        assert!(matches!(err, ConfigError::LengthMismatch { .. }));
        assert_eq!(engine.state().phase, TurnPhase::Disabled);
        assert_eq!(engine.pending_delay(), None);

        engine.start_new_game();
        elapse(&mut engine, 5000);
        assert_eq!(engine.state().phase, TurnPhase::Disabled);
        assert_eq!(engine.on_input(W), InputOutcome::Ignored);

        engine.configure(&GameConfig::default()).unwrap();
        assert_eq!(engine.state().phase, TurnPhase::Idle);
        assert_eq!(engine.state().sequence_length, 4);
        engine.start_new_game();
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
    }

    #[test]
    fn test_recovery_from_disabled_replaces_error_text() {
        let mut engine = engine_with(settings());
        let bad = GameConfig {
            catalog: Vec::new(),
            ..GameConfig::default()
        };
        assert!(engine.configure(&bad).is_err());
        assert!(last_text(&engine).starts_with("Minigame disabled"));

        let writes = engine.display().len();
        engine.configure(&GameConfig::default()).unwrap();
        assert_eq!(engine.state().phase, TurnPhase::Idle);
        assert_eq!(engine.display().len(), writes + 1);
        assert_eq!(last_text(&engine), IDLE_TEXT);
    }

    #[test]
    fn test_reconfigure_mid_turn_clears_sequence_text() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);

        let writes = engine.display().len();
        engine.configure(&GameConfig::default()).unwrap();
        assert_eq!(engine.state().phase, TurnPhase::Idle);
        assert_eq!(engine.display().len(), writes + 1);
        assert_eq!(last_text(&engine), IDLE_TEXT);
        assert_eq!(engine.pending_delay(), None);
    }

    #[test]
    fn test_reconfigure_with_auto_start_writes_prepare_once() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 700);

        let writes = engine.display().len();
        let config = GameConfig {
            start_on_launch: true,
            ..GameConfig::default()
        };
        engine.configure(&config).unwrap();
        assert_eq!(engine.state().phase, TurnPhase::Preparing);
        assert_eq!(engine.display().len(), writes + 1);
        assert_eq!(last_text(&engine), "Prepare P1...");
    }

    #[test]
    fn test_new_rejects_empty_game_settings() {
        let zero_length = TurnSequenceEngine::new(
            Catalog::arrows(),
            SequenceSettings {
                initial_length: 0,
                ..settings()
            },
            Vec::<String>::new(),
            ChaCha8Rng::seed_from_u64(42),
        );
        assert!(matches!(zero_length, Err(ConfigError::ZeroSequenceLength)));

        let zero_rounds = TurnSequenceEngine::new(
            Catalog::arrows(),
            SequenceSettings {
                max_rounds: Some(0),
                start_on_launch: true,
                ..settings()
            },
            Vec::<String>::new(),
            ChaCha8Rng::seed_from_u64(42),
        );
        assert!(matches!(zero_rounds, Err(ConfigError::ZeroMaxRounds)));
    }

    #[test]
    fn test_press_queued_during_prepare_frame_is_not_counted() {
        let mut engine = engine_with(settings());
        start_with(&mut engine, vec![0, 1]);
        elapse(&mut engine, 690);

        // The correct key arrives in the same frame the sequence appears
        let mut queue = KeyQueue::new();
        queue.push(W);
        assert_eq!(engine.update(Duration::from_millis(16), &mut queue), None);
        assert_eq!(engine.state().phase, TurnPhase::AwaitingInput);
        assert_eq!(engine.state().current_index, 0);
        assert_eq!(last_text(&engine), "P1 \u{25B6} \u{2191} \u{2193}");

        // From the next frame on, presses count
        let mut queue = KeyQueue::new();
        queue.push(W);
        assert_eq!(
            engine.update(Duration::from_millis(16), &mut queue),
            Some(InputOutcome::Advanced { index: 1 })
        );
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_prepare(Player::Two), "Prepare P2...");
        assert_eq!(format_miss(Player::One), "P1: MISS!");
        assert_eq!(
            format_sequence(Player::One, ["\u{2191}", "\u{2192}", "\u{2193}"]),
            "P1 \u{25B6} \u{2191} \u{2192} \u{2193}"
        );
    }
}
