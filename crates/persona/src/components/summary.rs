use color_eyre::Result;
use ratatui::{prelude::*, symbols::border, widgets::*};

use super::Component;
use crate::state::State;
use crate::style::{Role, Theme};

/// Read-only profile card shown once the submission completed. Never mutates
/// the session; starting over goes through the global reset binding.
pub struct SummaryComponent {
    theme: Theme,
}

impl SummaryComponent {
    pub fn new() -> Self {
        Self {
            theme: crate::style::default_dark_theme(),
        }
    }
}

impl Default for SummaryComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for SummaryComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Min(0)
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
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(20),
            Constraint::Fill(1),
        ])
        .split(horizontal[1]);

        let draft = state.session.draft();
        let initial = draft
            .name
            .trim()
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string());

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {initial}  "),
                self.theme.style_on(Role::InvertedText, Role::Accent),
            ),
            Span::raw("  "),
            Span::styled(
                draft.name.clone(),
                self.theme.style(Role::Text).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("       {}", draft.email),
            self.theme.style(Role::SubtleText),
        )));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("Age: ", self.theme.style(Role::SubtleText)),
            Span::styled(draft.age.clone(), self.theme.style(Role::Text)),
        ]));
        let occupation_span = if draft.occupation.trim().is_empty() {
            Span::styled(
                "No occupation specified",
                self.theme.style(Role::Muted).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(draft.occupation.clone(), self.theme.style(Role::Text))
        };
        lines.push(Line::from(vec![
            Span::styled("Occupation: ", self.theme.style(Role::SubtleText)),
            occupation_span,
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Bio",
            self.theme.style(Role::SubtleText),
        )));
        if draft.bio.trim().is_empty() {
            lines.push(Line::from(Span::styled(
                "No bio provided",
                self.theme.style(Role::Muted).add_modifier(Modifier::ITALIC),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                draft.bio.clone(),
                self.theme.style(Role::Text),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Interests",
            self.theme.style(Role::SubtleText),
        )));
        let mut tags: Vec<Span> = Vec::new();
        for interest in &draft.interests {
            tags.push(Span::styled(
                format!(" {interest} "),
                self.theme.style_on(Role::InvertedText, Role::Accent),
            ));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
        lines.push(Line::default());
        if let Some(at) = state.submitted_at {
            lines.push(Line::from(Span::styled(
                format!("Submitted {}", at.format("%-d %B %Y, %H:%M")),
                self.theme.style(Role::SubtleText),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("n", self.theme.style(Role::Primary)),
            Span::styled(" new profile    ", self.theme.style(Role::SubtleText)),
            Span::styled("q", self.theme.style(Role::Primary)),
            Span::styled(" quit", self.theme.style(Role::SubtleText)),
        ]));

        let card = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::bordered()
                    .title(" Profile Submitted ")
                    .title_style(
                        self.theme
                            .style(Role::Success)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_set(border::ROUNDED)
                    .border_style(self.theme.style(Role::Success))
                    .padding(Padding::horizontal(2)),
            );
        frame.render_widget(card, vertical[1]);
        Ok(())
    }
}
