use parking_lot::Mutex;
use std::sync::Arc;

/// What kind of value a field accepts from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Only characters that can appear in a decimal or exponent literal.
    Number,
}

impl FieldKind {
    /// Whether a typed character is accepted by a field of this kind.
    pub fn accepts(self, ch: char) -> bool {
        match self {
            FieldKind::Text => !ch.is_control(),
            FieldKind::Number => ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | 'e' | 'E'),
        }
    }
}

/// Imperative handle to the contents of an uncontrolled form field.
///
/// The text lives outside the form's `UiState`: keystrokes write into the
/// buffer directly and the form reads it only when it needs the value
/// (on submit). Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct FieldRef {
    value: Arc<Mutex<String>>,
    kind: FieldKind,
}

impl FieldRef {
    pub fn new(kind: FieldKind) -> Self {
        Self {
            value: Arc::new(Mutex::new(String::new())),
            kind,
        }
    }

    pub fn text() -> Self {
        Self::new(FieldKind::Text)
    }

    pub fn number() -> Self {
        Self::new(FieldKind::Number)
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Snapshot of the current contents.
    pub fn value(&self) -> String {
        self.value.lock().clone()
    }

    /// Replace the contents without any filtering.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }

    pub fn clear(&self) {
        self.value.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.value.lock().is_empty()
    }

    /// Number of characters (not bytes) currently in the field.
    pub fn char_count(&self) -> usize {
        self.value.lock().chars().count()
    }

    /// Append a typed character. Returns false if the field kind rejects it.
    pub fn push(&self, ch: char) -> bool {
        if !self.kind.accepts(ch) {
            return false;
        }
        self.value.lock().push(ch);
        true
    }

    /// Append pasted text, dropping characters the field kind rejects.
    /// Returns how many characters were kept.
    pub fn push_str(&self, text: &str) -> usize {
        let mut value = self.value.lock();
        let mut kept = 0;
        for ch in text.chars().filter(|ch| self.kind.accepts(*ch)) {
            value.push(ch);
            kept += 1;
        }
        kept
    }

    /// Remove the last character (backspace).
    pub fn pop(&self) -> Option<char> {
        self.value.lock().pop()
    }
}
