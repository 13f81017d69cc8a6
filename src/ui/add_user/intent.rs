use crate::form::ErrorRecord;
use crate::ui::mvi::Intent;

use super::state::FormFocus;

#[derive(Debug, Clone)]
pub enum AddUserIntent {
    FocusNext,
    FocusPrev,
    Focus(FormFocus),
    /// Submission failed validation. Replaces any error already shown.
    Rejected { error: ErrorRecord },
    /// Submission passed validation and was handed to the parent.
    Accepted,
    /// User acknowledged the error overlay.
    DismissError,
}

impl Intent for AddUserIntent {}
