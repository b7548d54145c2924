//! Seed boards: the built-in operations board and seed file loading
//!
//! Seed files are YAML or JSON, chosen by extension:
//!
//! ```yaml
//! columns:
//!   - id: todo
//!     title: To Do
//!     tasks:
//!       - id: "1"
//!         title: Website Redesign
//!         assignee: John Doe
//!         priority: High
//!         due_date: 2024-01-20
//!   - id: done
//!     title: Done
//! ```

use crate::error::{BoardError, Result};
use crate::types::{Board, BoardSeed, Column, Priority, Task};
use chrono::NaiveDate;
use std::path::Path;
use tracing::info;

fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn seed_task(
    id: &str,
    title: &str,
    description: &str,
    assignee: &str,
    priority: Priority,
    due_date: Option<NaiveDate>,
) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        description: Some(description.into()),
        assignee: assignee.into(),
        priority,
        due_date,
    }
}

/// The operations dashboard's starting board: four lanes, five tasks.
pub fn default_board() -> Board {
    let columns = vec![
        Column::new("todo", "To Do").with_tasks(vec![
            seed_task(
                "1",
                "Website Redesign",
                "Update the company website with new branding",
                "John Doe",
                Priority::High,
                date(2024, 1, 20),
            ),
            seed_task(
                "2",
                "Database Migration",
                "Migrate user data to new database system",
                "Jane Smith",
                Priority::Medium,
                date(2024, 1, 25),
            ),
        ]),
        Column::new("inprogress", "In Progress").with_tasks(vec![seed_task(
            "3",
            "API Documentation",
            "Write comprehensive API documentation",
            "Mike Johnson",
            Priority::Medium,
            date(2024, 1, 22),
        )]),
        Column::new("review", "Review").with_tasks(vec![seed_task(
            "4",
            "Security Audit",
            "Conduct security audit of the application",
            "Sarah Wilson",
            Priority::High,
            date(2024, 1, 18),
        )]),
        Column::new("done", "Done").with_tasks(vec![seed_task(
            "5",
            "User Authentication",
            "Implement user login and registration",
            "Alex Brown",
            Priority::High,
            None,
        )]),
    ];

    Board::new(columns).expect("built-in seed has unique ids")
}

/// Parse a YAML seed. Duplicate ids fail with [`BoardError::DuplicateId`].
pub fn from_yaml(text: &str) -> Result<Board> {
    let seed: BoardSeed = serde_yaml_ng::from_str(text)?;
    Board::try_from(seed)
}

/// Parse a JSON seed. Duplicate ids fail with [`BoardError::DuplicateId`].
pub fn from_json(text: &str) -> Result<Board> {
    let seed: BoardSeed = serde_json::from_str(text)?;
    Board::try_from(seed)
}

/// Render a board as YAML
pub fn to_yaml(board: &Board) -> Result<String> {
    Ok(serde_yaml_ng::to_string(board)?)
}

/// Load a seed file, choosing the format from its extension
pub fn load(path: impl AsRef<Path>) -> Result<Board> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let text = std::fs::read_to_string(path)?;
    let board = match extension.as_deref() {
        Some("yaml") | Some("yml") => from_yaml(&text)?,
        Some("json") => from_json(&text)?,
        _ => {
            return Err(BoardError::invalid_seed(format!(
                "unsupported seed format: {}",
                path.display()
            )))
        }
    };

    info!(
        path = %path.display(),
        columns = board.columns().len(),
        tasks = board.task_count(),
        "loaded seed board"
    );
    Ok(board)
}
