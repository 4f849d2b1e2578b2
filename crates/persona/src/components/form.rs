use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use profile::{Field, Interest, Phase};
use ratatui::{prelude::*, symbols::border, widgets::*};
use strum::IntoEnumIterator;
use tui_input::backend::crossterm::EventHandler as _;
use tui_input::Input;

use super::Component;
use crate::action::Action;
use crate::state::{InputMode, State};
use crate::style::{Role, Theme};
use crate::tui::EventResponse;

const BIO_LIMIT: usize = 500;
const BIO_COUNTER_WARN_AT: usize = 450;

/// Interest tags per grid row.
const GRID_COLUMNS: usize = 5;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::Name => "Enter your full name",
        Field::Email => "your.email@example.com",
        Field::Age => "Your age",
        Field::Occupation => "What do you do?",
        Field::Bio => "Tell us about yourself...",
        Field::Interests => "",
    }
}

/// The editable six-entry form. The session in the shared state owns the
/// draft; the editors here only mirror it for cursor handling and scrolling.
pub struct FormComponent {
    theme: Theme,
    focused: Field,
    name_input: Input,
    email_input: Input,
    age_input: Input,
    occupation_input: Input,
    bio_input: Input,
    interest_cursor: usize,
    spinner_frame: usize,
}

impl FormComponent {
    pub fn new() -> Self {
        Self {
            theme: crate::style::default_dark_theme(),
            focused: Field::Name,
            name_input: Input::default(),
            email_input: Input::default(),
            age_input: Input::default(),
            occupation_input: Input::default(),
            bio_input: Input::default(),
            interest_cursor: 0,
            spinner_frame: 0,
        }
    }

    fn editor(&self, field: Field) -> &Input {
        match field {
            Field::Name => &self.name_input,
            Field::Email => &self.email_input,
            Field::Age => &self.age_input,
            Field::Occupation => &self.occupation_input,
            Field::Bio => &self.bio_input,
            Field::Interests => unreachable!("the interest picker has no text editor"),
        }
    }

    fn editor_mut(&mut self, field: Field) -> &mut Input {
        match field {
            Field::Name => &mut self.name_input,
            Field::Email => &mut self.email_input,
            Field::Age => &mut self.age_input,
            Field::Occupation => &mut self.occupation_input,
            Field::Bio => &mut self.bio_input,
            Field::Interests => unreachable!("the interest picker has no text editor"),
        }
    }

    fn clear_editors(&mut self) {
        self.name_input = Input::default();
        self.email_input = Input::default();
        self.age_input = Input::default();
        self.occupation_input = Input::default();
        self.bio_input = Input::default();
        self.interest_cursor = 0;
        self.focused = Field::Name;
    }

    fn set_focus(&mut self, field: Field, state: &mut State) {
        self.focused = field;
        state.input_mode = if field.is_text() {
            InputMode::Insert
        } else {
            InputMode::Normal
        };
    }

    fn focus_next(&mut self, state: &mut State) {
        let order: Vec<Field> = Field::iter().collect();
        let pos = order.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.set_focus(order[(pos + 1) % order.len()], state);
    }

    fn focus_prev(&mut self, state: &mut State) {
        let order: Vec<Field> = Field::iter().collect();
        let pos = order.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.set_focus(order[(pos + order.len() - 1) % order.len()], state);
    }

    fn toggle_under_cursor(&mut self, state: &mut State) {
        let catalog = Interest::catalog();
        if let Some(interest) = catalog.get(self.interest_cursor) {
            state.session.toggle_interest(*interest);
        }
    }

    /// Cursor movement inside the interest grid. Leaving the grid vertically
    /// moves focus on to the neighbouring entry.
    fn move_interest_cursor(&mut self, code: KeyCode, state: &mut State) {
        let count = Interest::catalog().len();
        match code {
            KeyCode::Left => {
                self.interest_cursor = (self.interest_cursor + count - 1) % count;
            }
            KeyCode::Right => {
                self.interest_cursor = (self.interest_cursor + 1) % count;
            }
            KeyCode::Up => {
                if self.interest_cursor >= GRID_COLUMNS {
                    self.interest_cursor -= GRID_COLUMNS;
                } else {
                    self.focus_prev(state);
                }
            }
            KeyCode::Down => {
                if self.interest_cursor + GRID_COLUMNS < count {
                    self.interest_cursor += GRID_COLUMNS;
                } else {
                    self.focus_next(state);
                }
            }
            _ => {}
        }
    }
}

impl Default for FormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for FormComponent {
    fn height_constraint(&self) -> Constraint {
        Constraint::Min(0)
    }

    fn init(&mut self, state: &State) -> Result<()> {
        let _ = state;
        self.clear_editors();
        Ok(())
    }

    fn handle_key_events(
        &mut self,
        key: KeyEvent,
        state: &mut State,
    ) -> Result<Option<EventResponse<Action>>> {
        // Modifier combos always fall through to the global keybindings.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT)
        {
            return Ok(None);
        }

        if state.session.phase() == Phase::Submitting {
            // The submit control is disabled while the round-trip runs;
            // swallow everything so nothing edits or re-submits.
            return Ok(Some(EventResponse::Stop(Action::Update)));
        }

        let response = match key.code {
            KeyCode::Enter => EventResponse::Stop(Action::Submit),
            KeyCode::Tab => {
                self.focus_next(state);
                EventResponse::Stop(Action::Update)
            }
            KeyCode::BackTab => {
                self.focus_prev(state);
                EventResponse::Stop(Action::Update)
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right
                if self.focused == Field::Interests =>
            {
                self.move_interest_cursor(key.code, state);
                EventResponse::Stop(Action::Update)
            }
            KeyCode::Down => {
                self.focus_next(state);
                EventResponse::Stop(Action::Update)
            }
            KeyCode::Up => {
                self.focus_prev(state);
                EventResponse::Stop(Action::Update)
            }
            KeyCode::Char(' ') if self.focused == Field::Interests => {
                self.toggle_under_cursor(state);
                EventResponse::Stop(Action::Update)
            }
            _ if self.focused.is_text() => {
                let focused = self.focused;
                let handled = self
                    .editor_mut(focused)
                    .handle_event(&crossterm::event::Event::Key(key));
                if handled.is_some() {
                    let value = self.editor(focused).value().to_string();
                    state.session.edit_text(focused, value);
                    EventResponse::Stop(Action::Update)
                } else {
                    return Ok(None);
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(response))
    }

    fn update(&mut self, action: Action, _state: &mut State) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
            }
            Action::Reset => {
                self.clear_editors();
            }
            _ => {}
        }
        Ok(None)
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
            Constraint::Length(1), // Basic Information
            Constraint::Length(3), // Name
            Constraint::Length(1),
            Constraint::Length(3), // Email
            Constraint::Length(1),
            Constraint::Length(3), // Age
            Constraint::Length(1),
            Constraint::Length(1), // Additional Information
            Constraint::Length(3), // Occupation
            Constraint::Length(1),
            Constraint::Length(3), // Bio
            Constraint::Length(1),
            Constraint::Length(4), // Interests
            Constraint::Length(1),
            Constraint::Length(1), // status line
        ]);
        let [
            basic_header,
            name,
            name_error,
            email,
            email_error,
            age,
            age_error,
            additional_header,
            occupation,
            occupation_error,
            bio,
            bio_error,
            interests,
            interests_error,
            status,
        ] = vertical.areas(horizontal[1]);

        self.render_section(frame, basic_header, "Basic Information");
        self.render_text_field(frame, name, Field::Name, state);
        self.render_error(frame, name_error, Field::Name, state);
        self.render_text_field(frame, email, Field::Email, state);
        self.render_error(frame, email_error, Field::Email, state);
        self.render_text_field(frame, age, Field::Age, state);
        self.render_error(frame, age_error, Field::Age, state);

        self.render_section(frame, additional_header, "Additional Information");
        self.render_text_field(frame, occupation, Field::Occupation, state);
        self.render_error(frame, occupation_error, Field::Occupation, state);
        self.render_text_field(frame, bio, Field::Bio, state);
        self.render_error(frame, bio_error, Field::Bio, state);

        self.render_interests(frame, interests, state);
        self.render_error(frame, interests_error, Field::Interests, state);

        self.render_status(frame, status, state);
        Ok(())
    }
}

impl FormComponent {
    fn render_section(&self, frame: &mut Frame<'_>, area: Rect, title: &str) {
        let heading = Paragraph::new(title).style(
            self.theme
                .style(Role::Accent)
                .add_modifier(Modifier::BOLD),
        );
        frame.render_widget(heading, area);
    }

    fn render_text_field(&self, frame: &mut Frame<'_>, area: Rect, field: Field, state: &State) {
        let input = self.editor(field);
        let focused = self.focused == field;
        let has_error = state.session.error(field).is_some();

        // keep 2 for borders and 1 for cursor
        let width = area.width.max(3) - 3;
        let scroll = input.visual_scroll(width as usize);

        let title_style = if focused {
            self.theme
                .style(Role::Primary)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.style(Role::SubtleText)
        };
        let border_style = if has_error {
            self.theme.style(Role::Danger)
        } else if focused {
            self.theme.style(Role::Primary)
        } else {
            self.theme.style(Role::Muted)
        };

        let mut block = Block::bordered()
            .title(field.label())
            .title_style(title_style)
            .border_set(border::ROUNDED)
            .border_style(border_style);
        if field == Field::Bio {
            let count = input.value().chars().count();
            let counter_style = if count > BIO_COUNTER_WARN_AT {
                self.theme.style(Role::Warning)
            } else {
                self.theme.style(Role::SubtleText)
            };
            block = block.title_bottom(
                Line::from(Span::styled(format!("{count}/{BIO_LIMIT}"), counter_style))
                    .right_aligned(),
            );
        }

        let paragraph = if input.value().is_empty() {
            Paragraph::new(placeholder(field)).style(self.theme.style(Role::Muted))
        } else {
            Paragraph::new(input.value())
                .scroll((0, scroll as u16))
                .style(self.theme.style(Role::Text))
        };
        frame.render_widget(paragraph.block(block), area);

        if focused && state.session.phase() == Phase::Editing {
            // Ratatui hides the cursor unless it's explicitly set. Position it
            // inside the border on the input line.
            let x = input.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((area.x + x as u16, area.y + 1));
        }
    }

    fn render_error(&self, frame: &mut Frame<'_>, area: Rect, field: Field, state: &State) {
        if let Some(message) = state.session.error(field) {
            let line = Paragraph::new(format!("  {message}")).style(self.theme.style(Role::Danger));
            frame.render_widget(line, area);
        }
    }

    fn render_interests(&self, frame: &mut Frame<'_>, area: Rect, state: &State) {
        let focused = self.focused == Field::Interests;
        let title_style = if focused {
            self.theme
                .style(Role::Primary)
                .add_modifier(Modifier::BOLD)
        } else {
            self.theme.style(Role::SubtleText)
        };
        let border_style = if state.session.error(Field::Interests).is_some() {
            self.theme.style(Role::Danger)
        } else if focused {
            self.theme.style(Role::Primary)
        } else {
            self.theme.style(Role::Muted)
        };
        let block = Block::bordered()
            .title("Interests")
            .title_style(title_style)
            .border_set(border::ROUNDED)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let catalog = Interest::catalog();
        let mut lines: Vec<Line> = Vec::new();
        for row in catalog.chunks(GRID_COLUMNS) {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for interest in row {
                let index = catalog.iter().position(|i| i == interest).unwrap_or(0);
                let selected = state.session.draft().has_interest(*interest);
                let mut style = if selected {
                    self.theme.style_on(Role::InvertedText, Role::Accent)
                } else {
                    self.theme.style(Role::SubtleText)
                };
                if focused && index == self.interest_cursor {
                    style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                }
                spans.push(Span::styled(format!(" {interest} "), style));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_status(&self, frame: &mut Frame<'_>, area: Rect, state: &State) {
        let line = match state.session.phase() {
            Phase::Submitting => Line::from(vec![
                Span::styled(
                    SPINNER[self.spinner_frame % SPINNER.len()],
                    self.theme.style(Role::Warning),
                ),
                Span::styled(" Submitting profile...", self.theme.style(Role::Warning)),
            ]),
            _ if !state.session.errors().is_empty() => Line::from(Span::styled(
                "Please fix the highlighted entries and submit again",
                self.theme.style(Role::Danger),
            )),
            _ => Line::from(Span::styled(
                "Press Enter to submit",
                self.theme.style(Role::SubtleText),
            )),
        };
        frame.render_widget(Paragraph::new(line).centered(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn typed(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty())
    }

    #[test]
    fn typing_flows_into_the_session_draft() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        for c in "Ada".chars() {
            form.handle_key_events(typed(c), &mut state).unwrap();
        }
        assert_eq!(state.session.draft().name, "Ada");
    }

    #[test]
    fn tab_cycles_through_all_six_entries_and_wraps() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        let mut seen = vec![form.focused];
        for _ in 0..6 {
            form.handle_key_events(key(KeyCode::Tab), &mut state).unwrap();
            seen.push(form.focused);
        }
        assert_eq!(seen.first(), seen.last());
        assert_eq!(seen.len(), 7);
    }

    #[test]
    fn interests_focus_switches_to_normal_input_mode() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        form.handle_key_events(key(KeyCode::BackTab), &mut state)
            .unwrap();
        assert_eq!(form.focused, Field::Interests);
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn space_toggles_the_interest_under_the_cursor() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        form.handle_key_events(key(KeyCode::BackTab), &mut state)
            .unwrap();
        form.handle_key_events(key(KeyCode::Right), &mut state)
            .unwrap();
        form.handle_key_events(key(KeyCode::Char(' ')), &mut state)
            .unwrap();
        assert!(state.session.draft().has_interest(Interest::Design));

        form.handle_key_events(key(KeyCode::Char(' ')), &mut state)
            .unwrap();
        assert!(!state.session.draft().has_interest(Interest::Design));
    }

    #[test]
    fn enter_requests_submission() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        let response = form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Submit)));
    }

    #[test]
    fn editing_keys_are_swallowed_while_submitting() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        state.session.edit_text(Field::Name, "Ada Lovelace");
        state.session.edit_text(Field::Email, "ada@example.com");
        state.session.edit_text(Field::Age, "36");
        state.session.toggle_interest(Interest::Technology);
        state.session.submit();
        assert_eq!(state.session.phase(), Phase::Submitting);

        let response = form.handle_key_events(typed('x'), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Update)));
        assert_eq!(state.session.draft().name, "Ada Lovelace");

        let response = form.handle_key_events(key(KeyCode::Enter), &mut state).unwrap();
        assert_eq!(response, Some(EventResponse::Stop(Action::Update)));
    }

    #[test]
    fn control_combos_fall_through_to_global_bindings() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        let response = form
            .handle_key_events(
                KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
                &mut state,
            )
            .unwrap();
        assert_eq!(response, None);
    }

    #[test]
    fn reset_clears_the_editors_and_refocuses_the_name_entry() {
        let mut form = FormComponent::new();
        let mut state = State::new();
        for c in "Ada".chars() {
            form.handle_key_events(typed(c), &mut state).unwrap();
        }
        form.handle_key_events(key(KeyCode::Tab), &mut state).unwrap();

        form.update(Action::Reset, &mut state).unwrap();
        assert_eq!(form.focused, Field::Name);
        assert_eq!(form.editor(Field::Name).value(), "");
    }
}
