use color_eyre::Result;
use ratatui::{layout::Rect, Frame};

use crate::{action::Action, state::State, tui::Event, tui::EventResponse};

mod form;
mod summary;

pub use form::FormPage;
pub use summary::SummaryPage;

/// A `Page` composes multiple `Component`s and exposes a lifecycle similar to
/// the `Component` trait but at the page level. The app loop routes events to
/// the active page first; a `Stop` response keeps them away from the global
/// keybindings.
pub trait Page {
    fn name(&self) -> &str;

    fn init(&mut self, state: &State) -> Result<()> {
        let _ = state;
        Ok(())
    }

    fn handle_events(
        &mut self,
        event: Event,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        let _ = (event, state);
        Ok(None)
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        let _ = (action, state);
        Ok(None)
    }

    /// Draw the page using the provided `Frame` and `area`.
    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()>;
}
