use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x4f, 0x00, 0x5f);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const LABEL_TEXT: Color = Color::Rgb(0xc0, 0xc0, 0xc0);
pub const INPUT_BG: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const INPUT_FOCUS_BG: Color = Color::Rgb(0x3b, 0x2a, 0x40);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
