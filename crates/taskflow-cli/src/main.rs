use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{Level, debug};

use taskflow_core::app::{TaskBoard, ViewFilter, pending_summary, render_task};
use taskflow_core::collection;
use taskflow_core::impls::JsonFileTaskStore;
use taskflow_core::ports::{SystemClock, TaskStore, UlidGenerator};
use taskflow_core::{Config, Task, TaskId};

mod demo;

#[derive(Parser, Debug)]
#[command(name = "taskflow", version, about = "Task list with priorities")]
struct Cli {
    /// TOML config file
    #[arg(long, env = "TASKFLOW_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// JSON snapshot file (overrides the config file)
    #[arg(long, env = "TASKFLOW_STORE", global = true)]
    store: Option<PathBuf>,

    /// trace / debug / info / warn / error
    #[arg(long, env = "TASKFLOW_LOG", global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    #[command(flatten)]
    Board(BoardCommand),
    /// Walk through every operation on a throwaway in-memory list
    Demo,
}

/// Commands that work on the snapshot file.
#[derive(Debug, Clone, Subcommand)]
enum BoardCommand {
    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        description: Vec<String>,

        /// high / medium / low
        #[arg(short, long)]
        priority: Option<String>,
    },
    /// Mark a task as completed
    Done { id: TaskId },
    /// Mark a task as pending again
    Undo { id: TaskId },
    /// Flip a task between pending and completed
    Toggle { id: TaskId },
    /// Delete a task
    Remove { id: TaskId },
    /// List tasks
    List {
        /// all / pending / completed / high / medium / low
        #[arg(short, long, default_value = "all")]
        filter: ViewFilter,

        #[arg(short, long, value_enum, default_value_t = SortOrder::Display)]
        sort: SortOrder,
    },
    /// Search descriptions (case-insensitive); no term lists everything
    Search { term: Option<String> },
    /// Show counts and completion rate
    Stats {
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortOrder {
    /// Pending first, then priority, then newest
    Display,
    Priority,
    Date,
    /// Creation order
    Insertion,
}

type FileBoard = TaskBoard<JsonFileTaskStore, SystemClock, UlidGenerator<SystemClock>>;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_logging(parse_log_level(&config.log_level)?);
    debug!(?config, "configuration loaded");

    let command = match cli.command {
        Command::Demo => return demo::run(),
        Command::Board(command) => command,
    };

    let store = JsonFileTaskStore::new(&config.store_path);
    let mut board: FileBoard = TaskBoard::open(store, SystemClock, UlidGenerator::new(SystemClock))
        .with_context(|| format!("cannot open {}", config.store_path.display()))?
        .with_default_priority(config.default_priority);

    run(&mut board, command)
}

/// `trace` / `debug` / `info` / `warn` / `error`, any case.
fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .with_context(|| format!("invalid log level '{level}', use trace, debug, info, warn or error"))
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run<S: TaskStore>(
    board: &mut TaskBoard<S, SystemClock, UlidGenerator<SystemClock>>,
    command: BoardCommand,
) -> anyhow::Result<()> {
    match command {
        BoardCommand::Add {
            description,
            priority,
        } => {
            let id = board.add(&description.join(" "), priority.as_deref())?;
            println!("Task added with ID {id}");
        }
        BoardCommand::Done { id } => report(board.complete(id)?, id, "completed"),
        BoardCommand::Undo { id } => report(board.reopen(id)?, id, "reopened"),
        BoardCommand::Toggle { id } => match board.toggle(id)? {
            Some(true) => println!("{id} completed"),
            Some(false) => println!("{id} reopened"),
            None => println!("No task with ID {id}"),
        },
        BoardCommand::Remove { id } => report(board.remove(id)?, id, "removed"),
        BoardCommand::List { filter, sort } => {
            let tasks = match sort {
                SortOrder::Display => board.view(filter),
                SortOrder::Priority => collection::sort_by_priority(&filter.apply(board.tasks())),
                SortOrder::Date => collection::sort_by_date(&filter.apply(board.tasks())),
                SortOrder::Insertion => filter.apply(board.tasks()),
            };
            print_tasks(&tasks);
            println!("{}", pending_summary(board.tasks()));
        }
        BoardCommand::Search { term } => {
            print_tasks(&board.search(term.as_deref()));
        }
        BoardCommand::Stats { json } => {
            let stats = board.stats();
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{stats}");
            }
        }
    }
    Ok(())
}

fn report(found: bool, id: TaskId, verb: &str) {
    if found {
        println!("{id} {verb}");
    } else {
        println!("No task with ID {id}");
    }
}

fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for task in tasks {
        println!("{}", render_task(task));
    }
}
