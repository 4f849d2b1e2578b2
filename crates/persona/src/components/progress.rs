use color_eyre::Result;
use ratatui::{prelude::*, symbols::border, widgets::*};

use super::Component;
use crate::state::State;
use crate::style::{Role, Theme};

/// Completion gauge above the form: how many of the six entries already hold
/// something, recomputed from the session on every render.
pub struct ProgressComponent {
    theme: Theme,
}

impl ProgressComponent {
    pub fn new() -> Self {
        Self {
            theme: crate::style::default_dark_theme(),
        }
    }
}

impl Default for ProgressComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ProgressComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(3)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(64),
                Constraint::Fill(1),
            ])
            .split(area);

        let percent = state.session.progress();
        let gauge = Gauge::default()
            .block(
                Block::bordered()
                    .title("Profile Completion")
                    .title_style(self.theme.style(Role::SubtleText))
                    .border_set(border::ROUNDED)
                    .border_style(self.theme.style(Role::Muted)),
            )
            .gauge_style(self.theme.style_on(Role::InvertedText, Role::Primary))
            .percent(u16::from(percent))
            .label(format!("{percent}% complete"));
        frame.render_widget(gauge, horizontal[1]);
        Ok(())
    }
}
