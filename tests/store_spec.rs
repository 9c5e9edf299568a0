use crewdesk::error::Error;
use crewdesk::models::*;
use crewdesk::store::Store;
use speculate2::speculate;
use uuid::Uuid;

fn manager(store: &mut Store, name: &str) -> User {
    store.create_user(name, "Manager").expect("Failed to create manager")
}

fn developer(store: &mut Store, name: &str) -> User {
    store.create_user(name, "Developer").expect("Failed to create developer")
}

speculate! {
    before {
        let mut store = Store::new("admin");
    }

    describe "directory" {
        describe "create_user" {
            it "registers a manager" {
                let user = manager(&mut store, "alice");
                assert_eq!(user.role, Role::Manager);
                assert_eq!(store.resolve_actor("alice").map(|u| u.role), Some(Role::Manager));
            }

            it "registers a developer" {
                let user = developer(&mut store, "bob");
                assert_eq!(user.role, Role::Developer);
                assert_eq!(store.resolve_actor("bob").map(|u| u.role), Some(Role::Developer));
            }

            it "rejects an unknown role and leaves the directory unchanged" {
                let err = store.create_user("eve", "Wizard").unwrap_err();
                assert!(matches!(err, Error::InvalidRole(_)));
                assert_eq!(store.users().count(), 0);
            }

            it "rejects Administrator as a creatable role" {
                let err = store.create_user("eve", "Administrator").unwrap_err();
                assert!(matches!(err, Error::InvalidRole(_)));
                assert_eq!(store.users().count(), 0);
            }

            it "accepts duplicate names" {
                let first = manager(&mut store, "sam");
                developer(&mut store, "sam");

                assert_eq!(store.users().count(), 2);
                assert_eq!(store.resolve_actor("sam").map(|u| u.id), Some(first.id));
            }
        }

        describe "remove_user" {
            it "removes the first user with the given name" {
                manager(&mut store, "alice");
                developer(&mut store, "bob");

                assert!(store.remove_user("alice"));
                let names: Vec<_> = store.users().map(|u| u.name.clone()).collect();
                assert_eq!(names, vec!["bob"]);
            }

            it "is a silent no-op for an unknown name" {
                manager(&mut store, "alice");
                assert!(!store.remove_user("nobody"));
                assert_eq!(store.users().count(), 1);
            }

            it "never removes the administrator" {
                assert!(!store.remove_user("admin"));
                assert!(store.resolve_actor("admin").is_some());
            }
        }

        describe "users" {
            it "lists registered users in registration order" {
                manager(&mut store, "alice");
                developer(&mut store, "bob");
                developer(&mut store, "carol");

                let names: Vec<_> = store.users().map(|u| u.name.clone()).collect();
                assert_eq!(names, vec!["alice", "bob", "carol"]);
            }

            it "is restartable" {
                manager(&mut store, "alice");
                assert_eq!(store.users().count(), 1);
                assert_eq!(store.users().count(), 1);
            }

            it "does not include the administrator" {
                assert_eq!(store.users().count(), 0);
            }
        }

        describe "developers" {
            it "filters to developers preserving order" {
                manager(&mut store, "alice");
                developer(&mut store, "bob");
                developer(&mut store, "carol");

                let names: Vec<_> = store.developers().map(|u| u.name.clone()).collect();
                assert_eq!(names, vec!["bob", "carol"]);
            }
        }

        describe "resolve_actor" {
            it "resolves the reserved admin name" {
                assert_eq!(
                    store.resolve_actor("admin").map(|u| u.role),
                    Some(Role::Administrator)
                );
            }

            it "prefers the administrator over a registered user with the same name" {
                manager(&mut store, "admin");
                assert_eq!(
                    store.resolve_actor("admin").map(|u| u.role),
                    Some(Role::Administrator)
                );
            }

            it "returns None for unknown names" {
                assert!(store.resolve_actor("ghost").is_none());
            }
        }
    }

    describe "projects and membership" {
        describe "assign_developer" {
            it "is idempotent" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");

                store.assign_developer(project.id, bob.id);
                store.assign_developer(project.id, bob.id);

                assert_eq!(store.project_developers(project.id).count(), 1);
            }

            it "records both sides of the relation in one step" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");

                store.assign_developer(project.id, bob.id);

                assert!(store.is_member(project.id, bob.id));
                let member_names: Vec<_> =
                    store.project_developers(project.id).map(|u| u.name.clone()).collect();
                assert_eq!(member_names, vec!["bob"]);
                let project_names: Vec<_> =
                    store.developer_projects(bob.id).map(|p| p.name.clone()).collect();
                assert_eq!(project_names, vec!["Site"]);
            }
        }

        describe "scoped lookups" {
            it "only finds a project through its owning manager" {
                let alice = manager(&mut store, "alice");
                let mallory = manager(&mut store, "mallory");
                store.create_project(alice.id, "Site");

                assert!(store.manager_project(alice.id, "Site").is_some());
                assert!(store.manager_project(mallory.id, "Site").is_none());
            }

            it "only finds a project through a member developer" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let carol = developer(&mut store, "carol");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);

                assert!(store.developer_project(bob.id, "Site").is_some());
                assert!(store.developer_project(carol.id, "Site").is_none());
            }
        }

        describe "project_line" {
            it "renders the name with the owning manager" {
                let alice = manager(&mut store, "alice");
                let project = store.create_project(alice.id, "Site");
                assert_eq!(store.project_line(&project), "Site (Manager: alice)");
            }
        }
    }

    describe "tasks" {
        describe "create_task" {
            it "fails for a developer who is not a member" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");

                let err = store.create_task(project.id, bob.id, "Design").unwrap_err();
                assert!(matches!(err, Error::DeveloperNotMember { .. }));
                assert_eq!(store.tasks_for(project.id, bob.id).count(), 0);
            }

            it "appends pending tasks in creation order" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);

                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");
                store.create_task(project.id, bob.id, "Build").expect("Failed to create task");

                let lines: Vec<_> =
                    store.tasks_for(project.id, bob.id).map(|t| t.to_string()).collect();
                assert_eq!(lines, vec!["Design - Pending", "Build - Pending"]);
            }

            it "accepts duplicate task names within the same pair" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);

                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");
                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");

                assert_eq!(store.tasks_for(project.id, bob.id).count(), 2);
            }
        }

        describe "tasks_for" {
            it "yields nothing for a non-member" {
                let alice = manager(&mut store, "alice");
                let project = store.create_project(alice.id, "Site");
                assert_eq!(store.tasks_for(project.id, Uuid::new_v4()).count(), 0);
            }
        }

        describe "finalize_task" {
            it "flips the first matching task only" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);
                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");
                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");

                store.finalize_task(project.id, bob.id, "Design").expect("Failed to finalize");

                let statuses: Vec<_> =
                    store.tasks_for(project.id, bob.id).map(|t| t.status).collect();
                assert_eq!(statuses, vec![TaskStatus::Finalized, TaskStatus::Pending]);
            }

            it "is an idempotent success on an already finalized task" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);
                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");

                store.finalize_task(project.id, bob.id, "Design").expect("Failed to finalize");
                store.finalize_task(project.id, bob.id, "Design").expect("Failed to finalize");

                let lines: Vec<_> =
                    store.tasks_for(project.id, bob.id).map(|t| t.to_string()).collect();
                assert_eq!(lines, vec!["Design - Finalized"]);
            }

            it "reports an unknown task name" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);

                let err = store.finalize_task(project.id, bob.id, "Ghost").unwrap_err();
                assert!(matches!(err, Error::TaskNotFound(_)));
            }
        }

        describe "deregistration" {
            it "keeps a removed developer's membership and tasks reachable" {
                let alice = manager(&mut store, "alice");
                let bob = developer(&mut store, "bob");
                let project = store.create_project(alice.id, "Site");
                store.assign_developer(project.id, bob.id);
                store.create_task(project.id, bob.id, "Design").expect("Failed to create task");

                assert!(store.remove_user("bob"));
                assert!(store.resolve_actor("bob").is_none());

                let member_names: Vec<_> =
                    store.project_developers(project.id).map(|u| u.to_string()).collect();
                assert_eq!(member_names, vec!["bob (Developer)"]);
                assert_eq!(store.tasks_for(project.id, bob.id).count(), 1);
            }
        }
    }
}
