//! CLI definition for the opsboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use opsboard_kanban::Priority;

/// Opsboard - the operations dashboard task board.
///
/// Loads a board (the built-in one, or a YAML/JSON seed file), applies drag
/// gestures to it, and prints the result.
#[derive(Parser, Debug)]
#[command(name = "opsboard")]
#[command(version)]
#[command(about = "Operations task board: show, move, and replay drag gestures")]
#[command(
    long_about = "Opsboard keeps a board of columns (To Do, In Progress, Review, Done) \
    and reorders tasks the way the dashboard's drag and drop does.\n\n\
    Configuration is read from --config or ./.opsboard/config.yaml.\n\n\
    Environment variables:\n  \
    OPSBOARD_SEED                 Seed board file (YAML or JSON)\n  \
    OPSBOARD_LOG_FILTER           Tracing filter when RUST_LOG is unset\n  \
    OPSBOARD_ACTIVITY_CAPACITY    Activity log entries kept\n  \
    OPSBOARD_ACTIVATION_DISTANCE  Pointer travel before a drag starts\n  \
    OPSBOARD_ACTOR                Name recorded in the activity log"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file (YAML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed board file, overriding the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the board
    Show {
        /// Only tasks whose assignee contains this text (case-insensitive)
        #[arg(long)]
        assignee: Option<String>,
        /// Only tasks with this priority (low, medium, high)
        #[arg(long)]
        priority: Option<Priority>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drag a task onto a column or another task
    ///
    /// Dropping on a column appends the task to it. Dropping on a task puts
    /// the dragged task at that task's position.
    Move {
        /// Id of the task to drag
        task: String,
        /// Column id or task id to drop on
        target: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a scripted sequence of drag events and board edits
    ///
    /// The script is YAML: an optional `actor` and a list of `events`
    /// (start, end, cancel, press, pointer, release, add, delete).
    Replay {
        /// Path to the replay script
        script: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the built-in seed board as YAML
    Seed,
}
