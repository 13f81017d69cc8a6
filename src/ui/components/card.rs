use crate::ui::theme::{CARD_BORDER, HEADER_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, Widget};

/// Rounded, bordered container; the child is rendered inside the border.
pub struct Card<'a, W> {
    child: W,
    title: Option<&'a str>,
}

impl<'a, W> Card<'a, W> {
    pub fn new(child: W) -> Self {
        Self { child, title: None }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }
}

impl<W: Widget> Widget for Card<'_, W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CARD_BORDER));
        if let Some(title) = self.title {
            block = block.title(Span::styled(
                format!(" {} ", title),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ));
        }

        let inner = block.inner(area);
        block.render(area, buf);
        self.child.render(inner, buf);
    }
}
