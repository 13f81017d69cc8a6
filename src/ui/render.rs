use crate::ui::add_user::{render_add_user, FORM_HEIGHT};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::users_list::UsersList;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.users().len()), header);
    frame.render_widget(Clear, body);

    // One blank row between the form card and the list
    let (form_area, list_area) = split_body(body, FORM_HEIGHT + 1);
    frame.render_widget(UsersList::new(app.users()), list_area);
    frame.render_widget(
        Footer::new().widget(footer, app.last_export_error()),
        footer,
    );

    // Last, so the error overlay sits on top of everything else
    render_add_user(frame, form_area, area, app.form());
}
