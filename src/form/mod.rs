//! Form domain: field handles, validation rules and submitted user records.
//!
//! Nothing in here knows about the terminal. The UI layer reads fields
//! through [`FieldRef`] handles and feeds the raw strings to [`validate`].

mod field;
mod user;
mod validation;

pub use field::{FieldKind, FieldRef};
pub use user::{NewUser, User};
pub use validation::{coerce_age, validate, AgePolicy, ErrorRecord, InputError};
