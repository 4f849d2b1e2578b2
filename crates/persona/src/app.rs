use std::time::Duration;

use chrono::Local;
use color_eyre::Result;
use crossterm::event::KeyEvent;
use profile::{Phase, SubmitOutcome};
use ratatui::{
    layout::{Constraint, Layout},
    prelude::Rect,
    Frame,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, warn};

use crate::{
    action::Action,
    components::{footer::FooterComponent, Component},
    config::Config,
    pages::{FormPage, Page, SummaryPage},
    services::submission::SubmissionService,
    state::{InputMode, State},
    tui::{Event, EventResponse, Tui},
};

/// Which view is active. Doubles as the key into the keybinding tables.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Form,
    Summary,
}

pub struct App {
    pub config: Config,
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub pages: Vec<Box<dyn Page>>,
    pub footer: FooterComponent,
    pub submission: SubmissionService,
    pub should_quit: bool,
    pub should_suspend: bool,
    pub last_tick_key_events: Vec<KeyEvent>,
    pub mode: Mode,
    pub state: State,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
}

impl App {
    pub fn new(tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let config = Config::new()?;
        let (action_tx, action_rx) = mpsc::unbounded_channel::<Action>();
        let submission = SubmissionService::new(action_tx.clone());

        Ok(Self {
            config,
            tick_rate,
            frame_rate,
            pages: vec![Box::new(FormPage::new()), Box::new(SummaryPage::new())],
            footer: FooterComponent::new(),
            submission,
            should_quit: false,
            should_suspend: false,
            last_tick_key_events: Vec::new(),
            mode: Mode::Form,
            state: State::new(),
            action_tx,
            action_rx,
        })
    }

    fn active_page(&self) -> usize {
        match self.mode {
            Mode::Form => 0,
            Mode::Summary => 1,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?
            .tick_rate(self.tick_rate)
            .frame_rate(self.frame_rate);
        tui.enter()?;

        for page in self.pages.iter_mut() {
            page.init(&self.state)?;
        }
        self.footer.init(&self.state)?;

        let action_tx = self.action_tx.clone();
        loop {
            if let Some(e) = tui.next().await {
                let active = self.active_page();
                let mut stop_event_propagation = self
                    .pages
                    .get_mut(active)
                    .and_then(|page| page.handle_events(e.clone(), &mut self.state).ok())
                    .map(|response| match response {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action).ok();
                            false
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action).ok();
                            true
                        }
                        _ => false,
                    })
                    .unwrap_or(false);

                stop_event_propagation = stop_event_propagation
                    || self
                        .footer
                        .handle_events(e.clone(), &mut self.state)
                        .map(|response| match response {
                            Some(EventResponse::Continue(action)) => {
                                action_tx.send(action).ok();
                                false
                            }
                            Some(EventResponse::Stop(action)) => {
                                action_tx.send(action).ok();
                                true
                            }
                            _ => false,
                        })
                        .unwrap_or(false);

                if !stop_event_propagation {
                    match e {
                        Event::Quit => action_tx.send(Action::Quit)?,
                        Event::Tick => action_tx.send(Action::Tick)?,
                        Event::Render => action_tx.send(Action::Render)?,
                        Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
                        Event::Key(key) => {
                            if let Some(keymap) = self.config.keybindings.get(&self.mode) {
                                if let Some(action) = keymap.get(&vec![key]) {
                                    action_tx.send(action.clone())?;
                                } else {
                                    // If the key was not handled as a single key action,
                                    // then consider it for multi-key combinations.
                                    self.last_tick_key_events.push(key);
                                    if let Some(action) = keymap.get(&self.last_tick_key_events) {
                                        action_tx.send(action.clone())?;
                                    }
                                }
                            };
                        }
                        _ => {}
                    }
                }
            }

            while let Ok(action) = self.action_rx.try_recv() {
                if action != Action::Tick && action != Action::Render {
                    log::debug!("{action:?}");
                }
                match action {
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|f| {
                            self.render(f).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {:?}", err)))
                                    .unwrap();
                            })
                        })?;
                    }
                    ref action => self.apply(action)?,
                }

                let active = self.active_page();
                if let Some(page) = self.pages.get_mut(active) {
                    if let Some(follow_up) = page.update(action.clone(), &mut self.state)? {
                        action_tx.send(follow_up)?;
                    }
                }
                if let Some(follow_up) = self.footer.update(action.clone(), &mut self.state)? {
                    action_tx.send(follow_up)?;
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume)?;
                tui = Tui::new()?
                    .tick_rate(self.tick_rate)
                    .frame_rate(self.frame_rate);
                tui.enter()?;
            } else if self.should_quit {
                self.submission.abort();
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    /// State transitions driven by actions. Kept apart from the event loop so
    /// the wiring is testable without a terminal.
    fn apply(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Tick => {
                self.last_tick_key_events.drain(..);
            }
            Action::Quit => self.should_quit = true,
            Action::Suspend => self.should_suspend = true,
            Action::Resume => self.should_suspend = false,
            Action::Error(message) => warn!("{message}"),
            Action::Submit => {
                if self.state.session.submit() == SubmitOutcome::Accepted {
                    self.submission
                        .schedule(Duration::from_millis(self.config.config.submit_delay_ms));
                }
            }
            Action::SubmissionDone => {
                self.state.session.complete_submission();
                if self.state.session.phase() == Phase::Submitted {
                    self.state.submitted_at = Some(Local::now());
                    match serde_json::to_string(self.state.session.draft()) {
                        Ok(json) => info!(draft = %json, "profile submitted"),
                        Err(e) => warn!("could not serialize the submitted draft: {e}"),
                    }
                    self.switch_to(Mode::Summary);
                }
            }
            Action::Reset => {
                self.submission.abort();
                self.state.session.reset();
                self.state.submitted_at = None;
                self.state.input_mode = InputMode::Insert;
                self.switch_to(Mode::Form);
            }
            _ => {}
        }
        Ok(())
    }

    fn switch_to(&mut self, mode: Mode) {
        if self.mode != mode {
            self.mode = mode;
            if let Some(page) = self.pages.get(self.active_page()) {
                log::debug!("switching to the {} page", page.name());
            }
        }
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let vertical_layout =
            Layout::vertical(vec![Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        let active = self.active_page();
        if let Some(page) = self.pages.get_mut(active) {
            page.draw(frame, vertical_layout[0], &self.state)?;
        }
        self.footer.draw(frame, vertical_layout[1], &self.state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use profile::{Field, Interest};

    fn fill_valid(app: &mut App) {
        app.state.session.edit_text(Field::Name, "Ada Lovelace");
        app.state.session.edit_text(Field::Email, "ada@example.com");
        app.state.session.edit_text(Field::Age, "36");
        app.state.session.toggle_interest(Interest::Technology);
    }

    #[tokio::test]
    async fn rejected_submit_stays_on_the_form() {
        let mut app = App::new(4.0, 60.0).unwrap();
        app.apply(&Action::Submit).unwrap();

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.state.session.phase(), Phase::Editing);
        assert!(!app.state.session.errors().is_empty());
        assert!(!app.submission.is_pending());
    }

    #[tokio::test]
    async fn accepted_submit_schedules_and_done_switches_to_the_summary() {
        let mut app = App::new(4.0, 60.0).unwrap();
        fill_valid(&mut app);

        app.apply(&Action::Submit).unwrap();
        assert_eq!(app.state.session.phase(), Phase::Submitting);
        assert_eq!(app.mode, Mode::Form);
        assert!(app.submission.is_pending());

        app.apply(&Action::SubmissionDone).unwrap();
        assert_eq!(app.state.session.phase(), Phase::Submitted);
        assert_eq!(app.mode, Mode::Summary);
        assert!(app.state.submitted_at.is_some());
    }

    #[tokio::test]
    async fn done_without_a_pending_submission_changes_nothing() {
        let mut app = App::new(4.0, 60.0).unwrap();
        app.apply(&Action::SubmissionDone).unwrap();

        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.state.session.phase(), Phase::Editing);
        assert!(app.state.submitted_at.is_none());
    }

    #[tokio::test]
    async fn reset_returns_to_an_empty_form_from_the_summary() {
        let mut app = App::new(4.0, 60.0).unwrap();
        fill_valid(&mut app);
        app.apply(&Action::Submit).unwrap();
        app.apply(&Action::SubmissionDone).unwrap();
        assert_eq!(app.mode, Mode::Summary);

        app.apply(&Action::Reset).unwrap();
        assert_eq!(app.mode, Mode::Form);
        assert_eq!(app.state.session.phase(), Phase::Editing);
        assert!(app.state.session.draft().is_empty());
        assert!(app.state.submitted_at.is_none());
        assert!(!app.submission.is_pending());
    }

    #[tokio::test]
    async fn reset_while_submitting_cancels_the_pending_completion() {
        let mut app = App::new(4.0, 60.0).unwrap();
        fill_valid(&mut app);
        app.apply(&Action::Submit).unwrap();
        assert!(app.submission.is_pending());

        app.apply(&Action::Reset).unwrap();
        assert!(!app.submission.is_pending());

        // A completion that slipped through anyway hits the phase guard.
        app.apply(&Action::SubmissionDone).unwrap();
        assert_eq!(app.state.session.phase(), Phase::Editing);
        assert_eq!(app.mode, Mode::Form);
    }
}
