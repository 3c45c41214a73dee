//! Rendering pieces shared by modals and the form's input boxes.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

// ========== Cursor Rendering ==========

fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

/// Render a line of text with the char at `cursor_pos` shown inverted.
///
/// A cursor past the last char is drawn as a trailing block.
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let mut char_count = 0;
    for (i, c) in display_value.chars().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style()));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
        char_count += 1;
    }

    if cursor_pos >= char_count {
        spans.push(Span::styled(" ", cursor_style()));
    }

    Line::from(spans)
}

// ========== Horizontal Scroll ==========

/// Visible window of a text input that is wider than its box.
pub struct ScrolledView {
    pub display_value: String,
    pub cursor_pos: usize,
}

/// Pick the slice of `value` to show in `width` columns, keeping the
/// cursor visible. Positions are in chars, not bytes.
pub fn calculate_scroll(value: &str, cursor_pos: usize, width: usize) -> ScrolledView {
    let chars: Vec<char> = value.chars().collect();
    // One column is reserved for the trailing cursor block
    let visible = width.saturating_sub(1).max(1);

    if chars.len() < visible + 1 && cursor_pos < visible + 1 {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = (cursor_pos + 1).saturating_sub(visible);
    let end = (start + visible).min(chars.len());

    ScrolledView {
        display_value: chars[start..end].iter().collect(),
        cursor_pos: cursor_pos - start,
    }
}

// ========== Modal Frame ==========

/// Layout produced by [`render_modal_frame`].
pub struct ModalFrame {
    pub chunks: Rc<[Rect]>,
}

/// Center a bordered, titled box over the screen, clear what is under it,
/// and split its inside by `constraints`.
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

// ========== Help Text Builder ==========

/// Builder for a one-line key legend, e.g. `[Enter] Confirm  [Esc] Cancel`.
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut spans: Vec<Span> = Vec::new();

        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }

        Paragraph::new(Line::from(spans))
    }
}

impl Default for HelpText {
    fn default() -> Self {
        Self::new()
    }
}
