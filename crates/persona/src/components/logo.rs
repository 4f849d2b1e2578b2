use color_eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::state::State;

/// Block-letter wordmark drawn at the top of the form view. Each letter gets
/// its own color from a warm-to-cool gradient.
pub struct LogoComponent {
    theme: crate::style::Theme,
}

const GLYPH_ROWS: usize = 5;

/// One entry per letter of "PERSONA", five rows each.
const GLYPHS: [[&str; GLYPH_ROWS]; 7] = [
    // P
    ["██████ ", "██  ██ ", "██████ ", "██     ", "██     "],
    // E
    ["██████", "██    ", "█████ ", "██    ", "██████"],
    // R
    ["██████ ", "██  ██ ", "██████ ", "██  ██ ", "██  ██ "],
    // S
    [" █████", "██    ", " ████ ", "    ██", "█████ "],
    // O
    [" ████ ", "██  ██", "██  ██", "██  ██", " ████ "],
    // N
    ["██   ██", "███  ██", "██ █ ██", "██  ███", "██   ██"],
    // A
    ["  ██   ", " ████  ", "██  ██ ", "██████ ", "██  ██ "],
];

const GRADIENT: [Color; 7] = [
    Color::Rgb(255, 154, 79),
    Color::Rgb(255, 170, 92),
    Color::Rgb(240, 186, 106),
    Color::Rgb(205, 198, 130),
    Color::Rgb(165, 204, 160),
    Color::Rgb(130, 205, 192),
    Color::Rgb(99, 205, 218),
];

impl LogoComponent {
    pub fn new() -> Self {
        Self {
            theme: crate::style::default_dark_theme(),
        }
    }
}

impl Default for LogoComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogoComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Max(7)
    }

    fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, _state: &State) -> Result<()> {
        let width: usize = GLYPHS.iter().map(|g| g[0].chars().count() + 1).sum();
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Max(width as u16),
                Constraint::Min(0),
            ])
            .split(area);

        let mut lines: Vec<Line> = Vec::with_capacity(GLYPH_ROWS + 1);
        for row in 0..GLYPH_ROWS {
            let mut spans = Vec::with_capacity(GLYPHS.len() * 2);
            for (i, glyph) in GLYPHS.iter().enumerate() {
                spans.push(Span::styled(glyph[row], Style::default().fg(GRADIENT[i])));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(Line::from(Span::styled(
            "fill out your profile card",
            self.theme.style(crate::style::Role::SubtleText),
        )));

        frame.render_widget(Paragraph::new(lines).centered(), horizontal[1]);
        Ok(())
    }
}
