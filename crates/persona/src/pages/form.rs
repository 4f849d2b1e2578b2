use color_eyre::Result;
use ratatui::{
    layout::{Layout, Rect},
    Frame,
};

use super::Page;
use crate::{
    action::Action,
    components::{
        form::FormComponent, logo::LogoComponent, progress::ProgressComponent, Component,
    },
    state::State,
    tui::{Event, EventResponse},
};

/// The editable view: wordmark on top, completion gauge, then the six-entry
/// form. Active while the session is `Editing` or `Submitting`.
pub struct FormPage {
    logo: LogoComponent,
    progress: ProgressComponent,
    form: FormComponent,
}

impl FormPage {
    pub fn new() -> Self {
        Self {
            logo: LogoComponent::new(),
            progress: ProgressComponent::new(),
            form: FormComponent::new(),
        }
    }
}

impl Default for FormPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for FormPage {
    fn name(&self) -> &str {
        "form"
    }

    fn init(&mut self, state: &State) -> Result<()> {
        self.logo.init(state)?;
        self.progress.init(state)?;
        self.form.init(state)?;
        Ok(())
    }

    fn handle_events(
        &mut self,
        event: Event,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        // The form is the only interactive component on this page.
        self.form.handle_events(event, state)
    }

    fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
        if let Some(a) = self.form.update(action.clone(), state)? {
            return Ok(Some(a));
        }
        if let Some(a) = self.progress.update(action.clone(), state)? {
            return Ok(Some(a));
        }
        if let Some(a) = self.logo.update(action, state)? {
            return Ok(Some(a));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let chunks = Layout::vertical([
            self.logo.height_constraint(),
            self.progress.height_constraint(),
            self.form.height_constraint(),
        ])
        .split(area);

        self.logo.draw(frame, chunks[0], state)?;
        self.progress.draw(frame, chunks[1], state)?;
        self.form.draw(frame, chunks[2], state)?;
        Ok(())
    }
}
