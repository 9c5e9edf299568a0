use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work belonging to one (Project, Developer) pair.
///
/// A task never moves between projects or developers and is never deleted.
/// Task names may repeat within the same pair; operations that look tasks up
/// by name act on the first match in creation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub developer_id: Uuid,
    pub name: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(name: impl Into<String>, project_id: Uuid, developer_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            developer_id,
            name: name.into(),
            status: TaskStatus::Pending,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.status)
    }
}

/// The state of a task.
///
/// - `Pending`: Created, not yet finished
/// - `Finalized`: Marked done by its developer; there is no way back
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Finalized,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pending => "Pending",
            Self::Finalized => "Finalized",
        })
    }
}
