//! Permission gate: routes a (actor, command) pair into the store.
//!
//! Authorization works in two layers. First, each command is only wired up
//! for the roles listed in its match arm; any other role gets
//! [`Error::Unauthorized`]. Second, entity arguments are resolved through
//! owner-scoped store lookups (a manager's own projects, a developer's own
//! memberships), so a command aimed at someone else's entity fails with
//! [`Error::NotFound`] without any separate access check.

use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::Role;
use crate::store::Store;

/// A typed command issued by an actor.
#[derive(Debug, Clone)]
pub enum Command {
    // Administrator
    CreateUser { name: String, role: String },
    RemoveUser { name: String },
    ListUsers,
    // Manager
    CreateProject { name: String },
    ListDevelopers,
    AssignDeveloper { project: String, developer: String },
    ListProjectDevelopers { project: String },
    CreateTask { project: String, developer: String, task: String },
    // Manager lists own projects, Developer lists own memberships
    ListProjects,
    // Developer
    ListTasks { project: String },
    FinalizeTask { project: String, task: String },
}

impl Command {
    /// Human-readable operation name, used in error reports.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::CreateUser { .. } => "create users",
            Self::RemoveUser { .. } => "remove users",
            Self::ListUsers => "list users",
            Self::CreateProject { .. } => "create projects",
            Self::ListDevelopers => "list developers",
            Self::AssignDeveloper { .. } => "assign developers",
            Self::ListProjectDevelopers { .. } => "list project developers",
            Self::CreateTask { .. } => "create tasks",
            Self::ListProjects => "list projects",
            Self::ListTasks { .. } => "list tasks",
            Self::FinalizeTask { .. } => "finalize tasks",
        }
    }
}

/// The result of a successfully dispatched command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Unit acknowledgment.
    Done,
    /// Whether a removal actually dropped something.
    Removed(bool),
    /// Display-ready lines, one per listed entity.
    Listing(Vec<String>),
}

/// Dispatch a command on behalf of the given actor.
///
/// The actor is referenced by id and re-resolved inside so the store can be
/// borrowed mutably for the operation itself.
pub fn dispatch(store: &mut Store, actor_id: Uuid, command: Command) -> Result<Outcome> {
    let actor = store
        .user(actor_id)
        .ok_or_else(|| Error::NotFound("user".to_string()))?;
    let role = actor.role;

    match (role, command) {
        // ------------------------------------------------------------
        // Administrator
        // ------------------------------------------------------------
        (Role::Administrator, Command::CreateUser { name, role }) => {
            store.create_user(&name, &role)?;
            Ok(Outcome::Done)
        }
        (Role::Administrator, Command::RemoveUser { name }) => {
            Ok(Outcome::Removed(store.remove_user(&name)))
        }
        (Role::Administrator, Command::ListUsers) => {
            Ok(Outcome::Listing(store.users().map(|u| u.to_string()).collect()))
        }

        // ------------------------------------------------------------
        // Manager
        // ------------------------------------------------------------
        (Role::Manager, Command::CreateProject { name }) => {
            store.create_project(actor_id, &name);
            Ok(Outcome::Done)
        }
        (Role::Manager, Command::ListProjects) => Ok(Outcome::Listing(
            store
                .manager_projects(actor_id)
                .map(|p| store.project_line(p))
                .collect(),
        )),
        (Role::Manager, Command::ListDevelopers) => Ok(Outcome::Listing(
            store.developers().map(|u| u.to_string()).collect(),
        )),
        (Role::Manager, Command::AssignDeveloper { project, developer }) => {
            let project_id = own_project(store, actor_id, &project)?;
            let developer_id = registered_developer(store, &developer)?;
            store.assign_developer(project_id, developer_id);
            Ok(Outcome::Done)
        }
        (Role::Manager, Command::ListProjectDevelopers { project }) => {
            let project_id = own_project(store, actor_id, &project)?;
            Ok(Outcome::Listing(
                store
                    .project_developers(project_id)
                    .map(|u| u.to_string())
                    .collect(),
            ))
        }
        (Role::Manager, Command::CreateTask { project, developer, task }) => {
            let project_id = own_project(store, actor_id, &project)?;
            let developer_id = registered_developer(store, &developer)?;
            store.create_task(project_id, developer_id, &task)?;
            Ok(Outcome::Done)
        }

        // ------------------------------------------------------------
        // Developer
        // ------------------------------------------------------------
        (Role::Developer, Command::ListProjects) => Ok(Outcome::Listing(
            store
                .developer_projects(actor_id)
                .map(|p| store.project_line(p))
                .collect(),
        )),
        (Role::Developer, Command::ListTasks { project }) => {
            let project_id = member_project(store, actor_id, &project)?;
            Ok(Outcome::Listing(
                store
                    .tasks_for(project_id, actor_id)
                    .map(|t| t.to_string())
                    .collect(),
            ))
        }
        (Role::Developer, Command::FinalizeTask { project, task }) => {
            let project_id = member_project(store, actor_id, &project)?;
            store.finalize_task(project_id, actor_id, &task)?;
            Ok(Outcome::Done)
        }

        (role, command) => {
            tracing::warn!(%role, operation = command.operation(), "unauthorized command");
            Err(Error::Unauthorized {
                role,
                operation: command.operation(),
            })
        }
    }
}

/// Resolve a project name within the manager's own projects.
fn own_project(store: &Store, manager_id: Uuid, name: &str) -> Result<Uuid> {
    store
        .manager_project(manager_id, name)
        .map(|p| p.id)
        .ok_or_else(|| Error::NotFound(format!("project {name}")))
}

/// Resolve a project name within the developer's own memberships.
fn member_project(store: &Store, developer_id: Uuid, name: &str) -> Result<Uuid> {
    store
        .developer_project(developer_id, name)
        .map(|p| p.id)
        .ok_or_else(|| Error::NotFound(format!("project {name}")))
}

/// Resolve a developer name among registered developers.
fn registered_developer(store: &Store, name: &str) -> Result<Uuid> {
    store
        .developers()
        .find(|u| u.name == name)
        .map(|u| u.id)
        .ok_or_else(|| Error::NotFound(format!("developer {name}")))
}
