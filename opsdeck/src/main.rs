//! `opsdeck` — dashboard list boards on the command line.
//!
//! Renders the tasks or users board after applying search, facet, and sort
//! flags, the same derivation the dashboard pages run.
//!
//! ```bash
//! # All tasks
//! cargo run --bin opsdeck -- tasks
//!
//! # High-priority tasks matching a search term
//! cargo run --bin opsdeck -- tasks --search auth --priority high
//!
//! # Users sorted by join date, descending on the second press
//! cargo run --bin opsdeck -- users --sort join-date --descending
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use opsdeck::lists::{TaskListBoard, UserListBoard, UserSortKey};
use opsdeck_model::{Priority, TaskStatus, UserRole, UserStatus};

#[derive(Debug, Parser)]
#[command(name = "opsdeck", about = "Dashboard list boards on the command line")]
struct Cli {
    /// Log level filter (overridden by `RUST_LOG`).
    #[arg(long, env = "OPSDECK_LOG", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the tasks board.
    Tasks {
        /// Case-insensitive search over title and description.
        #[arg(long, default_value = "")]
        search: String,
        /// Status facet (todo, in-progress, completed, blocked).
        #[arg(long)]
        status: Option<TaskStatus>,
        /// Priority facet (low, medium, high).
        #[arg(long)]
        priority: Option<Priority>,
    },
    /// Show the users board.
    Users {
        /// Case-insensitive search over name and email.
        #[arg(long, default_value = "")]
        search: String,
        /// Role facet (admin, editor, viewer, user).
        #[arg(long)]
        role: Option<UserRole>,
        /// Status facet (active, inactive, suspended, pending).
        #[arg(long)]
        status: Option<UserStatus>,
        /// Sort column (name, email, role, status, last-active, join-date).
        #[arg(long)]
        sort: Option<UserSortKey>,
        /// Sort descending instead of ascending.
        #[arg(long)]
        descending: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Tasks {
            search,
            status,
            priority,
        } => {
            let mut board = TaskListBoard::new();
            board.filter.search = search;
            board.filter.status = status;
            board.filter.priority = priority;
            for task in board.visible() {
                println!(
                    "{:>13}  {:<11}  {:<6}  {:<12}  {}",
                    task.id, task.status, task.priority, task.due_date, task.title
                );
            }
        }
        Command::Users {
            search,
            role,
            status,
            sort,
            descending,
        } => {
            let mut board = UserListBoard::new();
            board.filter.search = search;
            board.filter.role = role;
            board.filter.status = status;
            if let Some(key) = sort {
                board.request_sort(key);
                if descending {
                    board.request_sort(key);
                }
            }
            for user in board.visible() {
                println!(
                    "{:>13}  {:<7}  {:<9}  {:<12}  {:<16} {}",
                    user.id, user.role, user.status, user.join_date, user.name, user.email
                );
            }
        }
    }

    ExitCode::SUCCESS
}
