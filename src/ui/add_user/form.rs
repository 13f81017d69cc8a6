use crate::form::{validate, AgePolicy, ErrorRecord, FieldRef, InputError, NewUser};
use crate::ui::components::ErrorModal;
use crate::ui::mvi::Reducer;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::intent::AddUserIntent;
use super::reducer::AddUserReducer;
use super::state::{AddUserState, FormFocus};

/// Receives `(trimmed name, raw age)` once per accepted submission.
pub type OnAddUser = Box<dyn FnMut(String, String) + Send>;

/// Result of a single submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added,
    Rejected(InputError),
}

/// User-entry form component.
///
/// Owns the error overlay state and two uncontrolled fields. Field text is
/// only read when the form is submitted and is cleared through the handles
/// after a successful submission.
pub struct AddUser {
    state: AddUserState,
    name_input: FieldRef,
    age_input: FieldRef,
    age_policy: AgePolicy,
    on_add_user: OnAddUser,
}

impl AddUser {
    pub fn new<F>(on_add_user: F) -> Self
    where
        F: FnMut(String, String) + Send + 'static,
    {
        Self {
            state: AddUserState::default(),
            name_input: FieldRef::text(),
            age_input: FieldRef::number(),
            age_policy: AgePolicy::default(),
            on_add_user: Box::new(on_add_user),
        }
    }

    pub fn with_age_policy(mut self, policy: AgePolicy) -> Self {
        self.age_policy = policy;
        self
    }

    pub fn state(&self) -> &AddUserState {
        &self.state
    }

    pub fn error(&self) -> Option<&ErrorRecord> {
        self.state.error.as_ref()
    }

    pub fn focus(&self) -> FormFocus {
        self.state.focus
    }

    pub fn name_input(&self) -> &FieldRef {
        &self.name_input
    }

    pub fn age_input(&self) -> &FieldRef {
        &self.age_input
    }

    /// The field receiving typed characters, if focus is on a field.
    pub fn focused_input(&self) -> Option<&FieldRef> {
        match self.state.focus {
            FormFocus::Name => Some(&self.name_input),
            FormFocus::Age => Some(&self.age_input),
            FormFocus::Submit => None,
        }
    }

    /// Validate the current field contents and hand them to the parent.
    pub fn submit(&mut self) -> SubmitOutcome {
        let name = self.name_input.value();
        let age = self.age_input.value();

        match validate(&name, &age, self.age_policy) {
            Err(error) => {
                tracing::debug!(?error, "Submission rejected");
                self.dispatch(AddUserIntent::Rejected {
                    error: error.record(),
                });
                SubmitOutcome::Rejected(error)
            }
            Ok(NewUser { name, age }) => {
                tracing::debug!(name_len = name.chars().count(), "Submission accepted");
                (self.on_add_user)(name, age);
                self.name_input.clear();
                self.age_input.clear();
                self.dispatch(AddUserIntent::Accepted);
                SubmitOutcome::Added
            }
        }
    }

    /// Acknowledge the error overlay. Field contents are left alone.
    pub fn dismiss_error(&mut self) {
        self.dispatch(AddUserIntent::DismissError);
    }

    /// Route a key press. Returns true if the form consumed it.
    ///
    /// While the error overlay is up it swallows every key and only the
    /// overlay's confirm keys have an effect.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.state.has_error() {
            if ErrorModal::dismisses(&key) {
                self.dismiss_error();
            }
            return true;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.dispatch(AddUserIntent::FocusNext);
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.dispatch(AddUserIntent::FocusPrev);
                true
            }
            KeyCode::Enter => {
                self.submit();
                true
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
                true
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match self.focused_input() {
                    Some(input) => {
                        input.push(ch);
                    }
                    None if ch == ' ' => {
                        self.submit();
                    }
                    None => {}
                }
                true
            }
            _ => false,
        }
    }

    /// Insert pasted text into the focused field.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        if self.state.has_error() {
            return true;
        }
        match self.focused_input() {
            Some(input) => {
                input.push_str(text);
                true
            }
            None => false,
        }
    }

    fn dispatch(&mut self, intent: AddUserIntent) {
        self.state = AddUserReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
