use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the form region (top, at most `form_height` rows)
/// and whatever is left for the users list.
pub fn split_body(body: Rect, form_height: u16) -> (Rect, Rect) {
    let form_height = form_height.min(body.height);
    let form = Rect {
        height: form_height,
        ..body
    };
    let rest = Rect {
        y: body.y + form_height,
        height: body.height - form_height,
        ..body
    };
    (form, rest)
}

/// A rect of at most `width` x `height`, centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// A rect of at most `width` columns, centered horizontally along the top of `area`.
pub fn top_centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_cover_the_screen() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 80, 24));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
        assert_eq!(footer.y, 21);
    }

    #[test]
    fn regions_degrade_on_tiny_screens() {
        let (header, body, footer) = layout_regions(Rect::new(0, 0, 10, 4));
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(body.height, 0);
    }

    #[test]
    fn split_body_caps_form_height() {
        let (form, rest) = split_body(Rect::new(0, 3, 80, 18), 9);
        assert_eq!(form, Rect::new(0, 3, 80, 9));
        assert_eq!(rest, Rect::new(0, 12, 80, 9));

        let (form, rest) = split_body(Rect::new(0, 3, 80, 5), 9);
        assert_eq!(form.height, 5);
        assert_eq!(rest.height, 0);
    }

    #[test]
    fn centered_rect_by_size_centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_by_size(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect_by_size(area, 100, 30), area);
    }

    #[test]
    fn top_centered_sticks_to_top() {
        let area = Rect::new(0, 5, 80, 20);
        assert_eq!(top_centered(area, 56, 9), Rect::new(12, 5, 56, 9));
    }
}
