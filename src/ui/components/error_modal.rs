//! Blocking overlay that reports a validation error.

use crate::form::ErrorRecord;
use crate::ui::components::Button;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, STATUS_ERROR};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

/// Preferred width of the overlay, including borders.
const MODAL_WIDTH: u16 = 48;

/// Borders, blank line above the message, blank line and button row below.
const CHROME_HEIGHT: u16 = 5;

const CONFIRM_LABEL: &str = "Okay";

pub struct ErrorModal<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ErrorModal<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }

    pub fn from_record(record: &'a ErrorRecord) -> Self {
        Self::new(&record.title, &record.message)
    }

    /// Keys that acknowledge the overlay. Enter and Space press "Okay",
    /// Esc stands in for clicking the backdrop.
    pub fn dismisses(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
    }

    /// Where the overlay goes when centered on `screen`.
    pub fn area(&self, screen: Rect) -> Rect {
        let width = MODAL_WIDTH.min(screen.width);
        let lines = wrapped_line_count(self.message, message_width(width));
        let height = lines.saturating_add(CHROME_HEIGHT);
        centered_rect_by_size(screen, width, height)
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Left)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        let message_area = Rect {
            x: rows[1].x.saturating_add(1),
            width: rows[1].width.saturating_sub(2),
            ..rows[1]
        };
        Paragraph::new(self.message)
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .render(message_area, buf);

        let button = Button::new(CONFIRM_LABEL).focused(true);
        let button_width = button.width().min(rows[3].width);
        let button_area = Rect {
            x: rows[3].right().saturating_sub(button_width + 1),
            width: button_width,
            ..rows[3]
        };
        button.render(button_area, buf);
    }
}

/// Columns available to the message: borders plus one cell of padding a side.
fn message_width(modal_width: u16) -> u16 {
    modal_width.saturating_sub(4).max(1)
}

/// Greedy word-wrap line count, matching how the message paragraph wraps.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines: u16 = 1;
    let mut current = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            current = len;
        } else if current + 1 + len <= width {
            current += 1 + len;
        } else {
            lines = lines.saturating_add(1);
            current = len;
        }
        // Words longer than a line spill over
        while current > width {
            lines = lines.saturating_add(1);
            current -= width;
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn wrapped_line_count_wraps_on_words() {
        assert_eq!(wrapped_line_count("short", 20), 1);
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 9), 2);
        assert_eq!(wrapped_line_count("aaaa bbbb cccc", 4), 3);
        assert_eq!(wrapped_line_count("", 10), 1);
    }

    #[test]
    fn long_words_spill_over() {
        assert_eq!(wrapped_line_count("abcdefghij", 4), 3);
    }

    #[test]
    fn area_is_centered_and_fits_message() {
        let screen = Rect::new(0, 0, 80, 24);
        let modal = ErrorModal::new("Invalid age", "Please enter a valid age (> 0).");
        let area = modal.area(screen);
        assert_eq!(area.width, MODAL_WIDTH);
        assert_eq!(area.height, 1 + CHROME_HEIGHT);
        assert_eq!(area.x, (80 - MODAL_WIDTH) / 2);
    }

    #[test]
    fn area_shrinks_to_small_screens() {
        let screen = Rect::new(0, 0, 20, 6);
        let modal = ErrorModal::new(
            "Invalid input",
            "Please enter a valid name and age (non-empty values).",
        );
        let area = modal.area(screen);
        assert!(area.width <= 20);
        assert!(area.height <= 6);
    }

    #[test]
    fn confirm_keys() {
        assert!(ErrorModal::dismisses(&KeyEvent::new(
            KeyCode::Enter,
            KeyModifiers::NONE
        )));
        assert!(ErrorModal::dismisses(&KeyEvent::new(
            KeyCode::Esc,
            KeyModifiers::NONE
        )));
        assert!(ErrorModal::dismisses(&KeyEvent::new(
            KeyCode::Char(' '),
            KeyModifiers::NONE
        )));
        assert!(!ErrorModal::dismisses(&KeyEvent::new(
            KeyCode::Char('a'),
            KeyModifiers::NONE
        )));
    }

    #[test]
    fn renders_title_message_and_button() {
        let screen = Rect::new(0, 0, 60, 12);
        let modal = ErrorModal::new("Invalid age", "Please enter a valid age (> 0).");
        let area = modal.area(screen);
        let mut buf = Buffer::empty(screen);
        modal.render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("Invalid age"));
        assert!(text.contains("Please enter a valid age (> 0)."));
        assert!(text.contains("Okay"));
    }
}
