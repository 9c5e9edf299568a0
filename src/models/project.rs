use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project owned by exactly one Manager.
///
/// The owning manager is set at creation and never changes. Project names
/// only need to be distinguishable within one manager's own projects;
/// lookups are always scoped to a single manager and return the first match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub manager_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, manager_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            manager_id,
            created_at: Utc::now(),
        }
    }
}

/// A relation row assigning a Developer to a Project.
///
/// Keeping the assignment in a single table (instead of mirrored lists on
/// both the project and the developer) means both sides of the relation are
/// updated in one step and can never disagree. At most one row exists per
/// (project, developer) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Membership {
    pub project_id: Uuid,
    pub developer_id: Uuid,
    pub created_at: DateTime<Utc>,
}
