use chrono::{DateTime, Local};
use profile::Session;

/// Shared application state handed to every page and component.
#[derive(Default)]
pub struct State {
    pub session: Session,
    pub input_mode: InputMode,
    /// Set when the submission round-trip completes; shown on the summary
    /// card and cleared by reset.
    pub submitted_at: Option<DateTime<Local>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Keystrokes are going into one of the text editors.
    Insert,
}

impl Default for InputMode {
    fn default() -> Self {
        // The form opens with the name editor focused.
        InputMode::Insert
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }
}
