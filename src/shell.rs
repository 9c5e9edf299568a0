//! Interactive prompt loop.
//!
//! The shell is a thin façade: it resolves a login name to an actor, shows
//! the actor's role menu, turns answers into typed [`Command`]s and prints
//! whatever the gate returns. Every domain error is printed and the loop
//! keeps going; only quitting or a broken terminal ends it.

use anyhow::Result;
use inquire::{InquireError, Select, Text};
use uuid::Uuid;

use crate::gate::{self, Command, Outcome};
use crate::models::Role;
use crate::store::Store;

pub fn run(store: &mut Store) -> Result<()> {
    println!("crewdesk - type 'exit' at the login prompt to quit");
    loop {
        let Some(name) = prompt("Username:")? else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if name == "exit" {
            return Ok(());
        }

        let Some(actor) = store.resolve_actor(&name) else {
            println!("User not found.");
            continue;
        };
        let (actor_id, role) = (actor.id, actor.role);
        println!("Logged in as {name} ({role}).");
        session(store, actor_id, role)?;
    }
}

/// One logged-in session: menu loop until the actor logs out.
fn session(store: &mut Store, actor_id: Uuid, role: Role) -> Result<()> {
    let options: &[&str] = match role {
        Role::Administrator => &["Create user", "Remove user", "List users", "Log out"],
        Role::Manager => &[
            "Create project",
            "List projects",
            "List developers",
            "Assign developer to project",
            "List project developers",
            "Create task",
            "Log out",
        ],
        Role::Developer => &["My projects", "Tasks in a project", "Finalize task", "Log out"],
    };

    loop {
        let choice = match Select::new("Option:", options.to_vec()).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(())
            }
            Err(e) => return Err(e.into()),
        };

        let Some(command) = build_command(choice)? else {
            // "Log out" or a canceled prompt
            if choice == "Log out" {
                return Ok(());
            }
            continue;
        };

        match gate::dispatch(store, actor_id, command) {
            Ok(outcome) => report(outcome),
            Err(e) => println!("{e}"),
        }
    }
}

/// Gather the arguments for a menu choice. Returns `None` for "Log out" or
/// when the actor cancels an argument prompt.
fn build_command(choice: &str) -> Result<Option<Command>> {
    let command = match choice {
        "Create user" => {
            let Some(name) = prompt("New user name:")? else { return Ok(None) };
            let Some(role) = prompt("Role (Manager/Developer):")? else { return Ok(None) };
            Command::CreateUser { name, role }
        }
        "Remove user" => {
            let Some(name) = prompt("User name to remove:")? else { return Ok(None) };
            Command::RemoveUser { name }
        }
        "List users" => Command::ListUsers,
        "Create project" => {
            let Some(name) = prompt("Project name:")? else { return Ok(None) };
            Command::CreateProject { name }
        }
        "List projects" | "My projects" => Command::ListProjects,
        "List developers" => Command::ListDevelopers,
        "Assign developer to project" => {
            let Some(project) = prompt("Project name:")? else { return Ok(None) };
            let Some(developer) = prompt("Developer name:")? else { return Ok(None) };
            Command::AssignDeveloper { project, developer }
        }
        "List project developers" => {
            let Some(project) = prompt("Project name:")? else { return Ok(None) };
            Command::ListProjectDevelopers { project }
        }
        "Create task" => {
            let Some(project) = prompt("Project name:")? else { return Ok(None) };
            let Some(developer) = prompt("Developer name:")? else { return Ok(None) };
            let Some(task) = prompt("Task name:")? else { return Ok(None) };
            Command::CreateTask { project, developer, task }
        }
        "Tasks in a project" => {
            let Some(project) = prompt("Project name:")? else { return Ok(None) };
            Command::ListTasks { project }
        }
        "Finalize task" => {
            let Some(project) = prompt("Project name:")? else { return Ok(None) };
            let Some(task) = prompt("Task name:")? else { return Ok(None) };
            Command::FinalizeTask { project, task }
        }
        _ => return Ok(None),
    };
    Ok(Some(command))
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Done => println!("Done."),
        Outcome::Removed(true) => println!("Removed."),
        Outcome::Removed(false) => println!("Nothing to remove."),
        Outcome::Listing(lines) if lines.is_empty() => println!("(none)"),
        Outcome::Listing(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
    }
}

/// Text prompt; `None` means the actor canceled (Esc / Ctrl-C).
fn prompt(message: &str) -> Result<Option<String>> {
    match Text::new(message).prompt() {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
