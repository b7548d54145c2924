//! Opsboard CLI - the operations dashboard task board.
//!
//! Commands:
//! - `opsboard show`: Print the board, optionally filtered
//! - `opsboard move <task> <target>`: Drag a task onto a column or task
//! - `opsboard replay <script>`: Apply a scripted sequence of events
//! - `opsboard seed`: Print the built-in board as YAML
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use tracing_subscriber::EnvFilter;

use opsboard::commands;
use opsboard::{Cli, Commands, OpsboardConfig, ReplayScript, Session};
use opsboard_kanban::TaskFilter;

fn run(cli: Cli, config: OpsboardConfig) -> opsboard::Result<String> {
    let seed = cli.seed.as_deref().or(config.seed.as_deref());

    match cli.command {
        Commands::Seed => commands::run_seed(),

        Commands::Show {
            assignee,
            priority,
            json,
        } => {
            let board = commands::load_board(seed)?;
            let mut filter = TaskFilter::new();
            if let Some(assignee) = assignee {
                filter = filter.with_assignee(assignee);
            }
            if let Some(priority) = priority {
                filter = filter.with_priority(priority);
            }
            commands::run_show(&board, &filter, json)
        }

        Commands::Move { task, target, json } => {
            let mut session = Session::new(commands::load_board(seed)?, &config);
            commands::run_move(&mut session, &task, &target, json)
        }

        Commands::Replay { script, json } => {
            let script = ReplayScript::load(&script)?;
            let mut session = Session::new(commands::load_board(seed)?, &config);
            commands::run_replay(&mut session, script, json)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let config = match OpsboardConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize tracing with appropriate level
    let filter = if cli.debug {
        EnvFilter::new("opsboard=debug,opsboard_kanban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli, config) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    std::process::exit(exit_code);
}
