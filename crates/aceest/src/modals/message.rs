use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Constraint,
    style::Color,
    widgets::{Paragraph, Wrap},
};

use super::helpers::{HelpText, render_modal_frame};
use super::{MessageModal, ModalResult};

const MODAL_WIDTH: u16 = 50;
const MODAL_MIN_HEIGHT: u16 = 6;
const PAGE_SIZE: u16 = 10;

/// Rows the message needs once wrapped inside the modal border
fn message_height(message: &str) -> usize {
    let text_width = (MODAL_WIDTH - 2) as usize;
    let rows: usize = message
        .lines()
        .map(|line| line.chars().count().div_ceil(text_width).max(1))
        .sum();
    rows.max(1)
}

/// Furthest scroll offset; the last row sits at the top of the view.
fn max_scroll(modal: &MessageModal) -> u16 {
    let last_row = message_height(&modal.message) - 1;
    last_row.min(u16::MAX as usize) as u16
}

/// Render the message modal
pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    let rows = message_height(&modal.message);
    let max_height = frame.area().height.saturating_sub(2);
    let height = (MODAL_MIN_HEIGHT as usize + rows).min(max_height as usize) as u16;

    let border_color = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        height,
        border_color,
        &[
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Message
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ],
    );

    let message = Paragraph::new(modal.message.as_str())
        .wrap(Wrap { trim: false })
        .scroll((modal.scroll, 0));
    frame.render_widget(message, mf.chunks[1]);

    let mut help = HelpText::new();
    if rows > mf.chunks[1].height as usize {
        help = help.key("[↑↓]", Color::Cyan, "Scroll");
    }
    let help = help
        .key("[Enter]", Color::Green, "or")
        .key("[Esc]", Color::Yellow, "to dismiss")
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

/// Handle key events for message modal
pub fn handle_message_key(key: KeyEvent, modal: &mut MessageModal) -> ModalResult {
    let max = max_scroll(modal);
    match key.code {
        KeyCode::Enter | KeyCode::Esc => return ModalResult::Dismissed,
        KeyCode::Up => modal.scroll = modal.scroll.saturating_sub(1),
        KeyCode::Down => modal.scroll = modal.scroll.saturating_add(1).min(max),
        KeyCode::PageUp => modal.scroll = modal.scroll.saturating_sub(PAGE_SIZE),
        KeyCode::PageDown => modal.scroll = modal.scroll.saturating_add(PAGE_SIZE).min(max),
        KeyCode::Home => modal.scroll = 0,
        KeyCode::End => modal.scroll = max,
        _ => {}
    }
    ModalResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_only_dismiss_keys_close() {
        let mut modal = MessageModal::info("Workouts", "No workouts logged yet.");
        assert_eq!(
            handle_message_key(key(KeyCode::Enter), &mut modal),
            ModalResult::Dismissed
        );
        assert_eq!(
            handle_message_key(key(KeyCode::Esc), &mut modal),
            ModalResult::Dismissed
        );
        assert_eq!(
            handle_message_key(key(KeyCode::Char('a')), &mut modal),
            ModalResult::Continue
        );
        assert_eq!(
            handle_message_key(key(KeyCode::Tab), &mut modal),
            ModalResult::Continue
        );
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let lines: Vec<String> = (1..=30).map(|i| format!("line {i}")).collect();
        let mut modal = MessageModal::info("Workouts", &lines.join("\n"));

        handle_message_key(key(KeyCode::Up), &mut modal);
        assert_eq!(modal.scroll, 0);

        handle_message_key(key(KeyCode::Down), &mut modal);
        handle_message_key(key(KeyCode::PageDown), &mut modal);
        assert_eq!(modal.scroll, 11);

        handle_message_key(key(KeyCode::PageDown), &mut modal);
        handle_message_key(key(KeyCode::PageDown), &mut modal);
        handle_message_key(key(KeyCode::PageDown), &mut modal);
        assert_eq!(modal.scroll, 29);

        handle_message_key(key(KeyCode::PageUp), &mut modal);
        assert_eq!(modal.scroll, 19);

        handle_message_key(key(KeyCode::Home), &mut modal);
        assert_eq!(modal.scroll, 0);
        handle_message_key(key(KeyCode::End), &mut modal);
        assert_eq!(modal.scroll, 29);
    }

    #[test]
    fn test_message_height_counts_lines() {
        assert_eq!(message_height("No workouts logged yet."), 1);
        assert_eq!(message_height("Logged Workouts:\n1. Run - 30 minutes"), 2);
        assert_eq!(message_height(&"x".repeat(48)), 1);
        assert_eq!(message_height(&"x".repeat(50)), 2);
    }

    #[test]
    fn test_huge_message_height_does_not_overflow() {
        let message = "entry\n".repeat(70_000);
        assert_eq!(message_height(&message), 70_000);

        let modal = MessageModal::info("Workouts", &message);
        assert_eq!(max_scroll(&modal), u16::MAX);
    }
}
