use thiserror::Error;

use crate::models::Role;

/// Domain errors.
///
/// Every variant is recoverable: operations report the error to the actor
/// and the command loop continues. Nothing here aborts the process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("developer {developer} is not a member of project {project}")]
    DeveloperNotMember { developer: String, project: String },

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("{role} is not allowed to {operation}")]
    Unauthorized { role: Role, operation: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
