use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::user::NewUser;

/// How ages that are not numbers are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgePolicy {
    /// Reject anything that does not parse as a finite number.
    #[default]
    Strict,
    /// Only reject ages that parse and are below 1. Unparseable input passes.
    Lenient,
}

/// Validation failures raised by a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid name and age (non-empty values).")]
    EmptyField,
    #[error("Please enter a valid age (> 0).")]
    InvalidAge,
}

impl InputError {
    pub fn title(&self) -> &'static str {
        match self {
            InputError::EmptyField => "Invalid input",
            InputError::InvalidAge => "Invalid age",
        }
    }

    pub fn record(&self) -> ErrorRecord {
        ErrorRecord {
            title: self.title().to_string(),
            message: self.to_string(),
        }
    }
}

/// Title and message shown in the error overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub title: String,
    pub message: String,
}

impl From<InputError> for ErrorRecord {
    fn from(error: InputError) -> Self {
        error.record()
    }
}

/// Numeric value of an age field, ignoring surrounding whitespace.
///
/// Returns `None` for anything that is not a number. Literals too large for
/// `f64` come back as infinities, so an overflowing negative age still
/// compares below 1.
pub fn coerce_age(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Validate raw field contents. The first failing rule wins.
///
/// On success the name is trimmed and the age is passed through untouched.
pub fn validate(name: &str, age: &str, policy: AgePolicy) -> Result<NewUser, InputError> {
    let name = name.trim();
    if name.is_empty() || age.trim().is_empty() {
        return Err(InputError::EmptyField);
    }

    match (coerce_age(age), policy) {
        (Some(value), _) if value < 1.0 => return Err(InputError::InvalidAge),
        (Some(value), AgePolicy::Strict) if value.is_infinite() => {
            return Err(InputError::InvalidAge)
        }
        (None, AgePolicy::Strict) => return Err(InputError::InvalidAge),
        _ => {}
    }

    Ok(NewUser {
        name: name.to_string(),
        age: age.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_empty_field() {
        assert_eq!(
            validate(" ", "5", AgePolicy::Strict),
            Err(InputError::EmptyField)
        );
    }

    #[test]
    fn blank_age_is_empty_field() {
        assert_eq!(
            validate("Max", "  ", AgePolicy::Strict),
            Err(InputError::EmptyField)
        );
    }

    #[test]
    fn empty_check_wins_over_age_check() {
        assert_eq!(
            validate("", "-3", AgePolicy::Strict),
            Err(InputError::EmptyField)
        );
    }

    #[test]
    fn zero_and_negative_ages_are_invalid() {
        for age in ["0", "-3", "0.5", " 0 "] {
            assert_eq!(
                validate("Max", age, AgePolicy::Lenient),
                Err(InputError::InvalidAge),
                "age {age:?}"
            );
        }
    }

    #[test]
    fn valid_input_trims_name_and_keeps_raw_age() {
        let user = validate("  Max ", " 30", AgePolicy::Strict).unwrap();
        assert_eq!(user.name, "Max");
        assert_eq!(user.age, " 30");
    }

    #[test]
    fn non_numeric_age_depends_on_policy() {
        assert_eq!(
            validate("Max", "abc", AgePolicy::Strict),
            Err(InputError::InvalidAge)
        );
        assert!(validate("Max", "abc", AgePolicy::Lenient).is_ok());
        assert_eq!(
            validate("Max", "inf", AgePolicy::Strict),
            Err(InputError::InvalidAge)
        );
    }

    #[test]
    fn overflowing_ages_follow_coercion() {
        assert_eq!(
            validate("Max", "-1e500", AgePolicy::Lenient),
            Err(InputError::InvalidAge)
        );
        assert_eq!(
            validate("Max", "-1e500", AgePolicy::Strict),
            Err(InputError::InvalidAge)
        );
        assert_eq!(
            validate("Max", "1e500", AgePolicy::Strict),
            Err(InputError::InvalidAge)
        );
        assert!(validate("Max", "1e500", AgePolicy::Lenient).is_ok());
        assert_eq!(coerce_age("-1e500"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn coerce_accepts_decimals_and_exponents() {
        assert_eq!(coerce_age("2.5"), Some(2.5));
        assert_eq!(coerce_age(" 1e2 "), Some(100.0));
        assert_eq!(coerce_age("NaN"), None);
        assert_eq!(coerce_age(""), None);
    }

    #[test]
    fn records_carry_exact_copy() {
        let record = InputError::EmptyField.record();
        assert_eq!(record.title, "Invalid input");
        assert_eq!(
            record.message,
            "Please enter a valid name and age (non-empty values)."
        );

        let record = ErrorRecord::from(InputError::InvalidAge);
        assert_eq!(record.title, "Invalid age");
        assert_eq!(record.message, "Please enter a valid age (> 0).");
    }
}
