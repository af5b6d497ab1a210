//! Display sinks: where the engine writes its visible text.

/// Receives the full visible text after every engine state change.
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
}

/// Records every write, in order. Handy for tests and replays.
impl DisplaySink for Vec<String> {
    fn set_text(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Holds the latest text for the terminal UI to draw.
#[derive(Debug, Clone, Default)]
pub struct TextPanel {
    text: String,
    writes: u64,
}

impl TextPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of writes since creation. The UI uses it to flash on change.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl DisplaySink for TextPanel {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}
