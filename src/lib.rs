//! crewdesk - role-gated project and task tracking for small teams.

pub mod config;
pub mod error;
pub mod gate;
pub mod models;
pub mod shell;
pub mod store;
