use crate::ui::mvi::Reducer;

use super::intent::AddUserIntent;
use super::state::{AddUserState, FormFocus};

pub struct AddUserReducer;

impl Reducer for AddUserReducer {
    type State = AddUserState;
    type Intent = AddUserIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            AddUserIntent::FocusNext => AddUserState {
                focus: state.focus.next(),
                ..state
            },
            AddUserIntent::FocusPrev => AddUserState {
                focus: state.focus.prev(),
                ..state
            },
            AddUserIntent::Focus(focus) => AddUserState { focus, ..state },
            AddUserIntent::Rejected { error } => AddUserState {
                error: Some(error),
                ..state
            },
            // Error is left as it was; focus returns to the first field for the next entry
            AddUserIntent::Accepted => AddUserState {
                focus: FormFocus::Name,
                ..state
            },
            AddUserIntent::DismissError => AddUserState {
                error: None,
                ..state
            },
        }
    }
}
