//! Domain models for crewdesk.
//!
//! # Core Concepts
//!
//! - [`User`]: A named actor with a fixed [`Role`]. The single Administrator
//!   is created at startup; Managers and Developers are registered through it.
//! - [`Project`]: Created and owned by exactly one Manager. Never deleted.
//! - [`Membership`]: A relation row recording that a Developer was assigned
//!   to a Project. Memberships are created once and never revoked; a
//!   Developer must hold one before tasks can be created for them.
//! - [`Task`]: A named unit of work tied to one (Project, Developer) pair for
//!   its whole life. Starts [`TaskStatus::Pending`] and can only move to
//!   [`TaskStatus::Finalized`], never back.

mod project;
mod task;
mod user;

pub use project::*;
pub use task::*;
pub use user::*;
