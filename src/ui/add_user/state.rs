use crate::form::ErrorRecord;
use crate::ui::mvi::UiState;

/// Which control of the form receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Age,
    Submit,
}

impl FormFocus {
    pub fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Age,
            FormFocus::Age => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Age => FormFocus::Name,
            FormFocus::Submit => FormFocus::Age,
        }
    }
}

/// State of the add-user form.
///
/// Field contents are deliberately absent: they live in the form's
/// `FieldRef` handles and are read on submit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddUserState {
    pub error: Option<ErrorRecord>,
    pub focus: FormFocus,
}

impl UiState for AddUserState {}

impl AddUserState {
    /// True while the error overlay is shown.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_error_and_focuses_name() {
        let state = AddUserState::default();
        assert!(!state.has_error());
        assert_eq!(state.focus, FormFocus::Name);
    }

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = FormFocus::Name;
        for _ in 0..3 {
            focus = focus.next();
        }
        assert_eq!(focus, FormFocus::Name);
        assert_eq!(FormFocus::Name.prev(), FormFocus::Submit);
        assert_eq!(FormFocus::Submit.prev(), FormFocus::Age);
    }
}
