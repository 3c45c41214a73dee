use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::actions;
use crate::modals::{ModalState, calculate_scroll, render_cursor_line};
use crate::state::{AppState, Focus, InputField, WINDOW_TITLE};

const FORM_WIDTH: u16 = 50;

/// The two inputs and two buttons of the logging form
pub struct WorkoutForm;

impl WorkoutForm {
    pub fn new() -> Self {
        Self
    }

    fn add(state: &mut AppState) -> EventResult {
        let modal = actions::add_workout(state);
        state.modal = ModalState::Message(modal);
        EventResult::Handled
    }

    fn view(state: &mut AppState) -> EventResult {
        let modal = actions::view_workouts(&state.store);
        state.modal = ModalState::Message(modal);
        EventResult::Handled
    }

    fn render_field(frame: &mut Frame, area: Rect, field: &InputField, is_focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3)]) // label, 1 line + borders
            .split(area);

        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let label = Paragraph::new(Line::from(Span::styled(&field.label, label_style)));
        frame.render_widget(label, chunks[0]);

        let border_color = if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let input_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let input_inner = input_block.inner(chunks[1]);
        frame.render_widget(input_block, chunks[1]);

        if is_focused {
            let scrolled = calculate_scroll(&field.value, field.cursor_pos, input_inner.width as usize);
            let line = render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, "");
            frame.render_widget(Paragraph::new(line), input_inner);
        } else {
            frame.render_widget(Paragraph::new(field.value.as_str()), input_inner);
        }
    }

    fn render_button(frame: &mut Frame, area: Rect, text: &str, is_focused: bool) {
        let (border_color, text_style) = if is_focused {
            (
                Color::Yellow,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Color::DarkGray, Style::default())
        };

        let button = Paragraph::new(Span::styled(format!(" {} ", text), text_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border_color)),
            );
        frame.render_widget(button, area);
    }
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for WorkoutForm {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::F(2) => return Self::add(state),
            KeyCode::F(3) => return Self::view(state),
            KeyCode::Char('a') if ctrl => return Self::add(state),
            KeyCode::Char('v') if ctrl => return Self::view(state),
            KeyCode::Tab | KeyCode::Down => {
                state.form.focus = state.form.focus.next();
                return EventResult::Handled;
            }
            KeyCode::BackTab | KeyCode::Up => {
                state.form.focus = state.form.focus.prev();
                return EventResult::Handled;
            }
            KeyCode::Enter => {
                return match state.form.focus {
                    Focus::AddButton => Self::add(state),
                    Focus::ViewButton => Self::view(state),
                    Focus::Workout | Focus::Duration => {
                        state.form.focus = state.form.focus.next();
                        EventResult::Handled
                    }
                };
            }
            _ => {}
        }

        let Some(field) = state.form.focused_field_mut() else {
            // Buttons have no text to edit; `q` leaves from here
            return match key.code {
                KeyCode::Char('q') if key.modifiers.is_empty() => EventResult::Exit,
                _ => EventResult::NotHandled,
            };
        };

        match key.code {
            KeyCode::Char(c) if !ctrl => field.insert_char(c),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_cursor_left(),
            KeyCode::Right => field.move_cursor_right(),
            KeyCode::Home => field.move_cursor_home(),
            KeyCode::End => field.move_cursor_end(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", WINDOW_TITLE));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Center a fixed-width column inside the window
        let width = FORM_WIDTH.min(inner.width);
        let column = Rect::new(
            inner.x + (inner.width - width) / 2,
            inner.y,
            width,
            inner.height,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacing
                Constraint::Length(4), // Workout field
                Constraint::Length(4), // Duration field
                Constraint::Length(1), // Spacing
                Constraint::Length(3), // Add button
                Constraint::Length(3), // View button
                Constraint::Min(0),
            ])
            .split(column);

        let focus = state.form.focus;
        Self::render_field(frame, chunks[1], &state.form.workout, focus == Focus::Workout);
        Self::render_field(frame, chunks[2], &state.form.duration, focus == Focus::Duration);
        Self::render_button(frame, chunks[4], "Add Workout", focus == Focus::AddButton);
        Self::render_button(frame, chunks[5], "View Workouts", focus == Focus::ViewButton);
    }
}
