use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A validated submission: trimmed name, age exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: String,
}

/// A user accepted by the application shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub age: String,
}

impl User {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            age: age.into(),
        }
    }

    /// Age as shown in the list; the raw string may carry whitespace.
    pub fn display_age(&self) -> &str {
        self.age.trim()
    }
}

impl From<NewUser> for User {
    fn from(new: NewUser) -> Self {
        Self::new(new.name, new.age)
    }
}
