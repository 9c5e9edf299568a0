use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::*;

/// In-memory state of the whole system.
///
/// All collections are ordered Vecs, so listings come back in creation or
/// registration order. User records live in an arena that is never pruned:
/// deregistering a user only drops it from the directory listing, while
/// membership and task rows keep pointing at the arena record. A removed
/// developer therefore still shows up in the projects it was assigned to.
pub struct Store {
    admin: User,
    users: Vec<User>,
    registered: Vec<Uuid>,
    projects: Vec<Project>,
    memberships: Vec<Membership>,
    tasks: Vec<Task>,
}

impl Store {
    /// Create an empty store with the reserved Administrator.
    ///
    /// The Administrator is held outside the directory: it is never listed
    /// among registered users and cannot be removed.
    pub fn new(admin_name: impl Into<String>) -> Self {
        Self {
            admin: User::new(admin_name, Role::Administrator),
            users: Vec::new(),
            registered: Vec::new(),
            projects: Vec::new(),
            memberships: Vec::new(),
            tasks: Vec::new(),
        }
    }

    pub fn admin(&self) -> &User {
        &self.admin
    }

    // ============================================================
    // User operations (the directory)
    // ============================================================

    /// Register a new Manager or Developer.
    ///
    /// Any other role string is rejected with [`Error::InvalidRole`] and the
    /// directory is left unchanged. Duplicate names are accepted; name
    /// lookups resolve to the earliest registration.
    pub fn create_user(&mut self, name: &str, role: &str) -> Result<User> {
        let parsed = match Role::from_str(role) {
            Some(r @ (Role::Manager | Role::Developer)) => r,
            _ => {
                tracing::warn!(role, "rejected user creation: invalid role");
                return Err(Error::InvalidRole(role.to_string()));
            }
        };

        let user = User::new(name, parsed);
        self.registered.push(user.id);
        self.users.push(user.clone());
        tracing::info!(name, role = %parsed, "registered user");
        Ok(user)
    }

    /// Deregister the first user with the given name, if any.
    ///
    /// Removing an unknown name is a silent no-op. Deregistration does not
    /// cascade: memberships and tasks referring to the user survive.
    pub fn remove_user(&mut self, name: &str) -> bool {
        let pos = self
            .registered
            .iter()
            .position(|id| self.arena(*id).is_some_and(|u| u.name == name));
        match pos {
            Some(pos) => {
                self.registered.remove(pos);
                tracing::info!(name, "deregistered user");
                true
            }
            None => false,
        }
    }

    /// Registered users in registration order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.registered.iter().filter_map(|id| self.arena(*id))
    }

    /// Registered users with the Developer role, in registration order.
    pub fn developers(&self) -> impl Iterator<Item = &User> {
        self.users().filter(|u| u.role == Role::Developer)
    }

    /// Resolve a login name to a user.
    ///
    /// The reserved admin name always wins; otherwise the first registered
    /// user with that name is returned.
    pub fn resolve_actor(&self, name: &str) -> Option<&User> {
        if name == self.admin.name {
            return Some(&self.admin);
        }
        self.users().find(|u| u.name == name)
    }

    /// Look up any user ever created, including deregistered ones.
    pub fn user(&self, id: Uuid) -> Option<&User> {
        if id == self.admin.id {
            return Some(&self.admin);
        }
        self.arena(id)
    }

    fn arena(&self, id: Uuid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    // ============================================================
    // Project operations
    // ============================================================

    pub fn create_project(&mut self, manager_id: Uuid, name: &str) -> Project {
        let project = Project::new(name, manager_id);
        self.projects.push(project.clone());
        tracing::info!(name, %manager_id, "created project");
        project
    }

    pub fn project(&self, id: Uuid) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Projects owned by a manager, in creation order.
    pub fn manager_projects(&self, manager_id: Uuid) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.manager_id == manager_id)
    }

    /// First project with the given name among a manager's own projects.
    ///
    /// Scoping the lookup to the owner is the authorization mechanism: a
    /// manager can never reach another manager's project through it.
    pub fn manager_project(&self, manager_id: Uuid, name: &str) -> Option<&Project> {
        self.manager_projects(manager_id).find(|p| p.name == name)
    }

    /// Display form of a project: `"<name> (Manager: <manager name>)"`.
    pub fn project_line(&self, project: &Project) -> String {
        let manager = self
            .user(project.manager_id)
            .map_or_else(|| project.manager_id.to_string(), |u| u.name.clone());
        format!("{} (Manager: {})", project.name, manager)
    }

    // ============================================================
    // Membership operations
    // ============================================================

    /// Assign a developer to a project. Idempotent: assigning an existing
    /// member changes nothing.
    pub fn assign_developer(&mut self, project_id: Uuid, developer_id: Uuid) {
        if self.is_member(project_id, developer_id) {
            return;
        }
        self.memberships.push(Membership {
            project_id,
            developer_id,
            created_at: chrono::Utc::now(),
        });
        tracing::info!(%project_id, %developer_id, "assigned developer to project");
    }

    pub fn is_member(&self, project_id: Uuid, developer_id: Uuid) -> bool {
        self.memberships
            .iter()
            .any(|m| m.project_id == project_id && m.developer_id == developer_id)
    }

    /// Members of a project, in assignment order.
    pub fn project_developers(&self, project_id: Uuid) -> impl Iterator<Item = &User> {
        self.memberships
            .iter()
            .filter(move |m| m.project_id == project_id)
            .filter_map(|m| self.arena(m.developer_id))
    }

    /// Projects a developer has been assigned to, in assignment order.
    pub fn developer_projects(&self, developer_id: Uuid) -> impl Iterator<Item = &Project> {
        self.memberships
            .iter()
            .filter(move |m| m.developer_id == developer_id)
            .filter_map(|m| self.project(m.project_id))
    }

    /// First project with the given name among a developer's memberships.
    pub fn developer_project(&self, developer_id: Uuid, name: &str) -> Option<&Project> {
        self.developer_projects(developer_id).find(|p| p.name == name)
    }

    // ============================================================
    // Task operations
    // ============================================================

    /// Create a task for a developer within a project.
    ///
    /// The developer must already be a member of the project. Duplicate task
    /// names within the same (project, developer) pair are accepted.
    pub fn create_task(
        &mut self,
        project_id: Uuid,
        developer_id: Uuid,
        name: &str,
    ) -> Result<Task> {
        if !self.is_member(project_id, developer_id) {
            return Err(Error::DeveloperNotMember {
                developer: self
                    .user(developer_id)
                    .map_or_else(|| developer_id.to_string(), |u| u.name.clone()),
                project: self
                    .project(project_id)
                    .map_or_else(|| project_id.to_string(), |p| p.name.clone()),
            });
        }

        let task = Task::new(name, project_id, developer_id);
        self.tasks.push(task.clone());
        tracing::info!(name, %project_id, %developer_id, "created task");
        Ok(task)
    }

    /// Tasks of a developer within a project, in creation order.
    ///
    /// Yields nothing for a non-member; absence is not an error here.
    pub fn tasks_for(&self, project_id: Uuid, developer_id: Uuid) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |t| t.project_id == project_id && t.developer_id == developer_id)
    }

    /// Mark the first task with the given name as finalized.
    ///
    /// Finalizing an already finalized task is an idempotent success. A name
    /// with no match reports [`Error::TaskNotFound`].
    pub fn finalize_task(
        &mut self,
        project_id: Uuid,
        developer_id: Uuid,
        name: &str,
    ) -> Result<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| {
                t.project_id == project_id && t.developer_id == developer_id && t.name == name
            })
            .ok_or_else(|| Error::TaskNotFound(name.to_string()))?;

        task.status = TaskStatus::Finalized;
        tracing::info!(name, %project_id, "finalized task");
        Ok(())
    }
}
