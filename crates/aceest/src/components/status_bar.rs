use super::{Component, EventResult};
use crate::state::AppState;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP_TEXT: &str = "Tab/↑↓: move | Enter: select | F2: add | F3: view | Esc: quit";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = Line::from(vec![
            Span::styled(
                format!("Workouts logged: {}", state.store.count()),
                Style::default().fg(Color::Cyan),
            ),
            Span::raw("  "),
            Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
