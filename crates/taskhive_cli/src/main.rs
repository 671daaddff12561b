//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskhive_core` linkage.
//! - Run one create/list/delete round trip against an in-memory store.

use taskhive_core::{InMemoryTaskRepository, NewTask, Settings, TaskService};

fn main() {
    let settings = Settings::from_env();
    println!(
        "{} core version={} ping={}",
        settings.app_name,
        taskhive_core::core_version(),
        taskhive_core::ping()
    );

    let service = TaskService::new(InMemoryTaskRepository::new());
    let draft = NewTask::with_description("Smoke check", "created by taskhive_cli");
    match smoke_round_trip(&service, &draft) {
        Ok(()) => println!("store round trip=ok"),
        Err(err) => {
            eprintln!("store round trip failed: {err}");
            std::process::exit(1);
        }
    }
}

fn smoke_round_trip(
    service: &TaskService<InMemoryTaskRepository>,
    draft: &NewTask,
) -> Result<(), Box<dyn std::error::Error>> {
    draft.validate()?;
    let created = service.create_task(draft)?;
    let listed = service.list_tasks()?;
    if listed.len() != 1 {
        return Err(format!("expected 1 task after create, found {}", listed.len()).into());
    }
    service.delete_task(created.id)?;
    Ok(())
}
