use color_eyre::Result;
use profile::Phase;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::state::{InputMode, State};
use crate::style::{Role, Theme};

/// Bottom bar: key hints for the current phase and input mode on the left,
/// the phase indicator on the right.
pub struct FooterComponent {
    theme: Theme,
}

impl FooterComponent {
    pub fn new() -> Self {
        Self {
            theme: crate::style::default_dark_theme(),
        }
    }

    fn hints(&self, state: &State) -> Vec<(&'static str, &'static str)> {
        match state.session.phase() {
            Phase::Editing => {
                if state.input_mode == InputMode::Normal {
                    vec![
                        ("←/→", "move"),
                        ("space", "toggle"),
                        ("tab", "next"),
                        ("enter", "submit"),
                        ("ctrl-r", "reset"),
                        ("ctrl-c", "quit"),
                    ]
                } else {
                    vec![
                        ("tab", "next"),
                        ("shift-tab", "prev"),
                        ("enter", "submit"),
                        ("ctrl-r", "reset"),
                        ("ctrl-c", "quit"),
                    ]
                }
            }
            Phase::Submitting => vec![("ctrl-c", "quit")],
            Phase::Submitted => vec![("n", "new profile"), ("q", "quit")],
        }
    }
}

impl Default for FooterComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FooterComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Length(1)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
        let mut spans: Vec<Span> = vec![Span::raw(" ")];
        for (key, label) in self.hints(state) {
            spans.push(Span::styled(key, self.theme.style(Role::Primary)));
            spans.push(Span::styled(
                format!(" {label}  "),
                self.theme.style(Role::SubtleText),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        let phase = state.session.phase();
        let phase_role = match phase {
            Phase::Editing => Role::Accent,
            Phase::Submitting => Role::Warning,
            Phase::Submitted => Role::Success,
        };
        let indicator = Paragraph::new(Line::from(Span::styled(
            format!("{phase} "),
            self.theme.style(phase_role),
        )))
        .right_aligned();
        frame.render_widget(indicator, area);
        Ok(())
    }
}
