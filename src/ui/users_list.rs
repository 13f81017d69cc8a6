use crate::form::User;
use crate::ui::components::Card;
use crate::ui::layout::top_centered;
use crate::ui::theme::{HEADER_TEXT, LABEL_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

const LIST_WIDTH: u16 = 56;

/// Users accepted so far, oldest first. Renders nothing when empty.
pub struct UsersList<'a> {
    users: &'a [User],
}

impl<'a> UsersList<'a> {
    pub fn new(users: &'a [User]) -> Self {
        Self { users }
    }

    /// `Name (30 years old)`
    pub fn entry(user: &User) -> Line<'static> {
        Line::from(vec![
            Span::styled(user.name.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!(" ({} years old)", user.display_age()),
                Style::default().fg(LABEL_TEXT),
            ),
        ])
    }
}

impl Widget for UsersList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.users.is_empty() || area.height < 3 {
            return;
        }

        let wanted = (self.users.len() as u16).saturating_add(2);
        let card = top_centered(area, LIST_WIDTH, wanted);
        // Keep the most recent entries when the list outgrows the screen
        let visible = card.height.saturating_sub(2) as usize;
        let skip = self.users.len().saturating_sub(visible);
        let lines: Vec<Line> = self.users.iter().skip(skip).map(Self::entry).collect();

        Card::new(Paragraph::new(lines)).title("Users").render(card, buf);
    }
}
