use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Renders its child exactly as the child would render itself.
///
/// Lets a view that draws several sibling widgets be handed around as a
/// single widget without introducing an enclosing block.
pub struct Wrapper<W> {
    child: W,
}

impl<W> Wrapper<W> {
    pub fn new(child: W) -> Self {
        Self { child }
    }
}

impl<W: Widget> Widget for Wrapper<W> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.child.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::{Block, Borders, Paragraph};

    fn paragraph() -> Paragraph<'static> {
        Paragraph::new("hello").block(Block::default().borders(Borders::ALL).title("t"))
    }

    #[test]
    fn output_is_identical_to_child() {
        let area = Rect::new(0, 0, 12, 4);
        let mut direct = Buffer::empty(area);
        paragraph().render(area, &mut direct);

        let mut wrapped = Buffer::empty(area);
        Wrapper::new(paragraph()).render(area, &mut wrapped);

        assert_eq!(direct, wrapped);
    }
}
