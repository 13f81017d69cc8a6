use crate::form::FieldRef;
use crate::ui::components::{Button, Card, ErrorModal, Wrapper};
use crate::ui::layout::top_centered;
use crate::ui::theme::{HEADER_TEXT, INPUT_BG, INPUT_FOCUS_BG, LABEL_TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use ratatui::Frame;

use super::form::AddUser;
use super::state::FormFocus;

pub const NAME_LABEL: &str = "Username";
pub const AGE_LABEL: &str = "Age (Years)";
pub const SUBMIT_LABEL: &str = "Add User";

/// Card height: seven content rows plus borders.
pub const FORM_HEIGHT: u16 = 9;
const FORM_WIDTH: u16 = 56;

const NAME_ROW: usize = 1;
const AGE_ROW: usize = 4;

/// Card with the form plus, when an error is set, the overlay.
struct AddUserView<'a> {
    form: &'a AddUser,
    /// Where the overlay is centered; usually the whole screen.
    portal: Rect,
}

impl Widget for AddUserView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Card::new(FormBody { form: self.form }).render(card_rect(area), buf);

        if let Some(error) = self.form.error() {
            let portal = self.portal.intersection(buf.area);
            let modal = ErrorModal::from_record(error);
            let modal_area = modal.area(portal);
            modal.render(modal_area, buf);
        }
    }
}

struct FormBody<'a> {
    form: &'a AddUser,
}

impl Widget for FormBody<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = form_rows(area);
        let focus = self.form.focus();
        let label_style = Style::default().fg(LABEL_TEXT).add_modifier(Modifier::BOLD);

        Line::from(Span::styled(NAME_LABEL, label_style)).render(rows[0], buf);
        input_line(
            self.form.name_input(),
            rows[NAME_ROW].width,
            focus == FormFocus::Name,
        )
        .render(rows[NAME_ROW], buf);

        Line::from(Span::styled(AGE_LABEL, label_style)).render(rows[3], buf);
        input_line(
            self.form.age_input(),
            rows[AGE_ROW].width,
            focus == FormFocus::Age,
        )
        .render(rows[AGE_ROW], buf);

        Button::new(SUBMIT_LABEL)
            .focused(focus == FormFocus::Submit)
            .render(rows[6], buf);
    }
}

/// Draw the form into `area`; the error overlay is centered on `portal`.
pub fn render_add_user(frame: &mut Frame, area: Rect, portal: Rect, form: &AddUser) {
    frame.render_widget(Wrapper::new(AddUserView { form, portal }), area);
    if let Some(position) = cursor_position(area, form) {
        frame.set_cursor_position(position);
    }
}

/// Terminal cursor position for the focused field, if any.
///
/// No cursor while the overlay is up or the button has focus.
pub fn cursor_position(area: Rect, form: &AddUser) -> Option<Position> {
    if form.error().is_some() {
        return None;
    }
    let row = match form.focus() {
        FormFocus::Name => NAME_ROW,
        FormFocus::Age => AGE_ROW,
        FormFocus::Submit => return None,
    };
    let input = form.focused_input()?;

    let rows = form_rows(card_inner(card_rect(area)));
    let rect = rows[row];
    if rect.width == 0 || rect.height == 0 {
        return None;
    }
    let offset = input.char_count().min(rect.width.saturating_sub(1) as usize) as u16;
    Some(Position::new(rect.x + offset, rect.y))
}

fn card_rect(area: Rect) -> Rect {
    top_centered(area, FORM_WIDTH, FORM_HEIGHT)
}

fn card_inner(card: Rect) -> Rect {
    Rect {
        x: card.x.saturating_add(1),
        y: card.y.saturating_add(1),
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    }
}

fn form_rows(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::vertical([Constraint::Length(1); 7]).split(area)
}

/// One input row: the tail of the value that fits, padded to the full width.
fn input_line(input: &FieldRef, width: u16, focused: bool) -> Line<'static> {
    let bg = if focused { INPUT_FOCUS_BG } else { INPUT_BG };
    let style = Style::default().fg(HEADER_TEXT).bg(bg);

    let width = width as usize;
    let value = input.value();
    let visible_chars = width.saturating_sub(1);
    let skip = value.chars().count().saturating_sub(visible_chars);
    let visible: String = value.chars().skip(skip).collect();

    Line::from(Span::styled(format!("{:<width$}", visible, width = width), style))
}
