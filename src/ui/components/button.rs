use crate::ui::theme::{ACCENT, BUTTON_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

/// A single-line button label, highlighted when focused.
pub struct Button<'a> {
    label: &'a str,
    focused: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width in cells, including one cell of padding on each side.
    pub fn width(&self) -> u16 {
        (self.label.chars().count() as u16).saturating_add(2)
    }

    fn style(&self) -> Style {
        if self.focused {
            Style::default()
                .fg(BUTTON_TEXT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        Line::from(Span::styled(format!(" {} ", self.label), style)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_counts_padding() {
        assert_eq!(Button::new("Add User").width(), 10);
        assert_eq!(Button::new("Okay").width(), 6);
    }

    #[test]
    fn focus_changes_background() {
        assert_eq!(Button::new("x").focused(true).style().bg, Some(ACCENT));
        assert_eq!(Button::new("x").style().bg, None);
    }
}
