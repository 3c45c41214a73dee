mod helpers;
mod message;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub use helpers::{HelpText, ScrolledView, calculate_scroll, render_cursor_line, render_modal_frame};
pub use message::{handle_message_key, render_message_modal};

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal was dismissed
    Dismissed,
    /// Key was swallowed, modal still active
    Continue,
}

/// The dialog currently blocking the form, if any
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    None,
    Message(MessageModal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageModal {
    pub title: String,
    pub message: String,
    pub is_error: bool,
    /// First message row shown; long listings scroll inside the dialog
    pub scroll: u16,
}

impl MessageModal {
    pub fn info(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: false,
            scroll: 0,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            is_error: true,
            scroll: 0,
        }
    }
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, modal: &ModalState) {
    match modal {
        ModalState::None => {}
        ModalState::Message(modal) => render_message_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: KeyEvent, modal: &mut ModalState) -> ModalResult {
    match modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Message(modal) => handle_message_key(key, modal),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
