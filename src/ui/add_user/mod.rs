//! The add-user form.
//!
//! - `state.rs` - error record and keyboard focus
//! - `intent.rs` - focus moves and submission outcomes
//! - `reducer.rs` - state transitions
//! - `form.rs` - the component: field handles, submit/dismiss, key routing
//! - `view.rs` - rendering

mod form;
mod intent;
mod reducer;
mod state;
mod view;

pub use form::{AddUser, OnAddUser, SubmitOutcome};
pub use intent::AddUserIntent;
pub use reducer::AddUserReducer;
pub use state::{AddUserState, FormFocus};
pub use view::{
    cursor_position, render_add_user, AGE_LABEL, FORM_HEIGHT, NAME_LABEL, SUBMIT_LABEL,
};
