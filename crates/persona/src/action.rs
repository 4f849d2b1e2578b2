use serde::{Deserialize, Serialize};
use strum::Display;

/// Messages flowing through the app channel. The serde derives let the
/// keybinding tables in the config refer to actions by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Help,
    Update,
    /// Ask the controller to validate the draft and start the submission.
    Submit,
    /// The simulated backend round-trip finished.
    SubmissionDone,
    /// Throw the draft away and start over on the empty form.
    Reset,
}
