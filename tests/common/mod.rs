use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn type_text(text: &str) -> Vec<KeyEvent> {
    text.chars().map(|ch| press(KeyCode::Char(ch))).collect()
}
