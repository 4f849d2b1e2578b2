//! Semantic color roles for the UI. Components ask the theme for a role
//! instead of hardcoding colors, so palettes can be swapped in one place.

use ratatui::style::{Color, Style};

/// Semantic roles used by pages and components to request colors independent
/// of a specific theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Role {
    Background,
    Surface,
    Text,
    SubtleText,
    InvertedText,

    Primary,
    Accent,
    Success,
    Warning,
    Danger,
    Muted,
}

/// A mapping from semantic roles to colors for a given theme.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoleColors {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtle_text: Color,
    pub inverted_text: Color,

    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub muted: Color,
}

impl RoleColors {
    pub fn color(&self, role: Role) -> Color {
        match role {
            Role::Background => self.background,
            Role::Surface => self.surface,
            Role::Text => self.text,
            Role::SubtleText => self.subtle_text,
            Role::InvertedText => self.inverted_text,

            Role::Primary => self.primary,
            Role::Accent => self.accent,
            Role::Success => self.success,
            Role::Warning => self.warning,
            Role::Danger => self.danger,
            Role::Muted => self.muted,
        }
    }
}

/// A full theme: a name plus the role palette.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub name: String,
    pub roles: RoleColors,
}

impl Theme {
    /// Convenience method to turn a role into a ratatui `Style`.
    pub fn style(&self, role: Role) -> Style {
        Style::default().fg(self.roles.color(role))
    }

    /// Same as `style`, but with a themed background.
    pub fn style_on(&self, role: Role, on: Role) -> Style {
        Style::default()
            .fg(self.roles.color(role))
            .bg(self.roles.color(on))
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_dark_theme()
    }
}

/// Default dark theme with a warm accent, tuned for readable contrast on the
/// form and summary views.
pub fn default_dark_theme() -> Theme {
    let roles = RoleColors {
        background: Color::Rgb(24, 22, 28),
        surface: Color::Rgb(36, 34, 42),
        text: Color::Rgb(222, 222, 226),
        subtle_text: Color::Rgb(134, 134, 142),
        inverted_text: Color::Rgb(18, 16, 22),

        primary: Color::Rgb(255, 154, 79),  // warm orange
        accent: Color::Rgb(99, 205, 218),   // teal-cyan
        success: Color::Rgb(102, 187, 106),
        warning: Color::Rgb(255, 214, 102),
        danger: Color::Rgb(239, 83, 80),
        muted: Color::Rgb(108, 106, 118),
    };

    Theme {
        name: "Default Dark".to_string(),
        roles,
    }
}
