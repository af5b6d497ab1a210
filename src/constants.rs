// Frame timing
pub const FRAME_MS: u64 = 16; // ~60 FPS, input is polled once per frame

// Turn timing
pub const DEFAULT_PRE_TURN_DELAY_MS: u64 = 700;
pub const MISS_FEEDBACK_DELAY_MS: u64 = 1000;

// Sequence defaults
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;
pub const DEFAULT_MAX_ROUNDS: u32 = 2;
pub const DEFAULT_TRIGGER_TAG: &str = "Player";

// Display text
pub const IDLE_TEXT: &str = "Waiting for players...";
pub const COMPLETION_TEXT: &str = "Minigame Conclu\u{ED}do!";
pub const SEQUENCE_MARKER: &str = "\u{25B6}";

// Files
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "sequence-duel.log";
pub const LOG_ENV_VAR: &str = "SEQUENCE_DUEL_LOG";
