use color_eyre::Result;
use ratatui::{layout::Rect, Frame};

use super::Page;
use crate::{
    action::Action,
    components::{summary::SummaryComponent, Component},
    state::State,
    tui::{Event, EventResponse},
};

/// The read-only view shown once the submission completed.
pub struct SummaryPage {
    summary: SummaryComponent,
}

impl SummaryPage {
    pub fn new() -> Self {
        Self {
            summary: SummaryComponent::new(),
        }
    }
}

impl Default for SummaryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for SummaryPage {
    fn name(&self) -> &str {
        "summary"
    }

    fn init(&mut self, state: &State) -> Result<()> {
        self.summary.init(state)
    }

    fn handle_events(
        &mut self,
        event: Event,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        // Nothing to edit here; every key falls through to the summary-mode
        // keybindings (`n` reset, `q` quit).
        self.summary.handle_events(event, state)
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        self.summary.update(action, state)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        self.summary.draw(frame, area, state)
    }
}
