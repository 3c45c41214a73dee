use std::io;

use aceest_core::WorkoutStore;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{Component, EventResult, status_bar::StatusBar, workout_form::WorkoutForm};
use crate::modals::{ModalResult, ModalState, handle_modal_key, render_modal};
use crate::state::AppState;

pub struct App {
    state: AppState,
    form: WorkoutForm,
    status_bar: StatusBar,
}

impl App {
    /// Create the form over a store owned by the caller's entry point
    pub fn new(store: WorkoutStore) -> Self {
        Self {
            state: AppState::new(store),
            form: WorkoutForm::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        tracing::info!(
            count = self.state.store.count(),
            "Form closed; in-memory workouts discarded"
        );
        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Form
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.form.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);

        // Modal overlay (if active)
        render_modal(frame, &self.state.modal);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        // A dialog blocks all other input until dismissed
        if self.state.has_modal() {
            if handle_modal_key(key_event, &mut self.state.modal) == ModalResult::Dismissed {
                self.state.modal = ModalState::None;
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.exit = true;
                return;
            }
            _ => {}
        }

        if self.form.handle_key(key_event, &mut self.state) == EventResult::Exit {
            self.state.exit = true;
        }
    }
}
