//! Command-line front end for lazytask.
//!
//! # Responsibility
//! - Parse arguments and environment-provided configuration.
//! - Call core task operations and render their results.

use chrono::Local;
use clap::{Parser, Subcommand};
use colored::Colorize;
use lazytask_core::{
    classify, default_log_level, import_assignments, init_logging, CanvasClient, JsonFileStore,
    TaskId, TaskService, TaskStore, Urgency,
};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_TASKS_FILE: &str = "tasks.json";

#[derive(Parser)]
#[command(name = "lazytask", version, about = "Personal due-date task tracker")]
struct Cli {
    /// Task file location; defaults to $LAZYTASK_FILE, then ./tasks.json.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Directory for log files; file logging is off when absent.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task due at `MM-DD-YYYY HH:MM AM/PM`.
    Add { description: String, due: String },
    /// List tasks ordered by due date.
    List,
    /// Rewrite a task's description and due date.
    Edit {
        id: String,
        description: String,
        due: String,
    },
    /// Complete (remove) a task.
    Done { id: String },
    /// Import current-term assignments from the Canvas API.
    ///
    /// Reads the API root from $CANVAS_BASE_URL and the bearer credential
    /// from $CANVAS_TOKEN.
    Sync,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: {err}");
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let path = cli
        .file
        .or_else(|| std::env::var_os("LAZYTASK_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TASKS_FILE));
    let store = JsonFileStore::new(path);
    let mut service = TaskService::open(store).map_err(|err| err.to_string())?;

    match cli.command {
        Command::Add { description, due } => {
            let task = service
                .add_task(&description, &due)
                .map_err(|err| err.to_string())?;
            println!("added {}", short_id(task.id));
        }
        Command::List => render_list(&service),
        Command::Edit {
            id,
            description,
            due,
        } => {
            let id = resolve_id(&service, &id)?;
            service
                .update_task(id, &description, &due)
                .map_err(|err| err.to_string())?;
            println!("updated {}", short_id(id));
        }
        Command::Done { id } => {
            let id = resolve_id(&service, &id)?;
            let removed = service.complete_task(id).map_err(|err| err.to_string())?;
            println!("completed: {}", removed.description);
        }
        Command::Sync => {
            let base_url = std::env::var("CANVAS_BASE_URL")
                .map_err(|_| "CANVAS_BASE_URL environment variable not set".to_string())?;
            let token = std::env::var("CANVAS_TOKEN")
                .map_err(|_| "CANVAS_TOKEN environment variable not set".to_string())?;
            let client = CanvasClient::new(base_url, token);
            let report =
                import_assignments(&client, &mut service).map_err(|err| err.to_string())?;
            println!(
                "imported {} assignments ({} courses skipped)",
                report.imported, report.courses_failed
            );
        }
    }
    Ok(())
}

fn render_list<S: TaskStore>(service: &TaskService<S>) {
    let tasks = service.list_by_due();
    if tasks.is_empty() {
        println!("no tasks");
        return;
    }

    let now = Local::now();
    for task in tasks {
        let due = task.due.format("%m-%d-%Y %I:%M %p");
        let line = format!("{}  {} (due {})", short_id(task.id), task.description, due);
        // Terminal palette has no orange; yellow stands in for "soon".
        let styled = match classify(task.due - now) {
            Urgency::Overdue => line.bright_black(),
            Urgency::Urgent => line.red(),
            Urgency::Soon => line.yellow(),
            Urgency::Normal => line.green(),
        };
        println!("{styled}");
    }
}

/// First 8 hex digits of a task id, enough to address tasks from a listing.
fn short_id(id: TaskId) -> String {
    id.to_string().chars().take(8).collect()
}

/// Resolves a full or prefix task id against the current collection.
fn resolve_id<S: TaskStore>(service: &TaskService<S>, input: &str) -> Result<TaskId, String> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Err("task id cannot be empty".to_string());
    }
    if let Ok(id) = TaskId::parse_str(&needle) {
        return Ok(id);
    }

    let matches: Vec<TaskId> = service
        .tasks()
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle))
        .map(|task| task.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no task matches id `{input}`")),
        _ => Err(format!("id `{input}` is ambiguous; give more digits")),
    }
}
