use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An actor in the system.
///
/// A user's name and role are fixed at creation. Names are not required to
/// be unique; lookups by name resolve to the first registered match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}

/// The role of a user, fixed for its lifetime.
///
/// - `Administrator`: Manages the user directory. Exactly one exists, created
///   at startup with a reserved name; it cannot be created or removed.
/// - `Manager`: Creates projects, assigns developers, creates tasks.
/// - `Developer`: Works on assigned projects and finalizes tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Administrator,
    Manager,
    Developer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrator",
            Self::Manager => "Manager",
            Self::Developer => "Developer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Administrator" => Some(Self::Administrator),
            "Manager" => Some(Self::Manager),
            "Developer" => Some(Self::Developer),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
