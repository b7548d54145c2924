//! Terminal-aware board rendering.
//!
//! Boards print as one table column per board column, with the task count in
//! the header the way the dashboard shows it in each lane's badge.

use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use opsboard_kanban::{Board, LogEntry, Task};

/// Longest title shown before truncating
const TITLE_WIDTH: usize = 40;

/// Create a table pre-configured for terminal-width-aware output.
///
/// Uses crossterm to detect the actual terminal width, falling back to
/// 120 columns when not connected to a TTY.
pub fn new_table() -> Table {
    let width = crossterm::terminal::size().map(|(w, _)| w).unwrap_or(120);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(width);
    table
}

/// Truncate a string to `max` characters, appending "..." if truncated.
///
/// Safe for multi-byte (UTF-8) strings.
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// A task card: title, then priority and assignee, then the due date
pub fn task_card(task: &Task) -> String {
    let mut card = format!(
        "{} [{}]\n{}",
        truncate_str(&task.title, TITLE_WIDTH),
        task.id,
        task.priority
    );
    if !task.assignee.is_empty() {
        card.push_str(&format!(" · {}", task.assignee));
    }
    if let Some(due) = task.due_date {
        card.push_str(&format!("\nDue {}", due));
    }
    card
}

/// The whole board, lanes side by side
pub fn board_table(board: &Board) -> Table {
    let mut table = new_table();
    table.set_header(
        board
            .columns()
            .iter()
            .map(|column| Cell::new(format!("{} ({})", column.title, column.len()))),
    );

    let depth = board.columns().iter().map(|c| c.len()).max().unwrap_or(0);
    for row in 0..depth {
        table.add_row(board.columns().iter().map(|column| {
            column
                .tasks
                .get(row)
                .map(task_card)
                .unwrap_or_default()
        }));
    }
    table
}

/// A flat task listing, used for filtered views
pub fn task_list_table(board: &Board, tasks: &[&Task]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["ID", "Title", "Column", "Priority", "Assignee", "Due"]);
    for task in tasks {
        let column = board
            .find_owning_column(&task.id)
            .map(|c| c.title.clone())
            .unwrap_or_default();
        table.add_row(vec![
            task.id.to_string(),
            truncate_str(&task.title, TITLE_WIDTH),
            column,
            task.priority.to_string(),
            task.assignee.clone(),
            task.due_date.map(|d| d.to_string()).unwrap_or_default(),
        ]);
    }
    table
}

/// Activity log, newest first
pub fn activity_table<'a>(entries: impl IntoIterator<Item = &'a LogEntry>) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Time", "Operation", "Actor", "Result"]);
    for entry in entries {
        let result = if entry.is_failure() {
            entry.output["error"].as_str().unwrap_or("failed").to_string()
        } else {
            entry.output.to_string()
        };
        table.add_row(vec![
            entry.timestamp.format("%H:%M:%S").to_string(),
            entry.op.clone(),
            entry.actor.clone().unwrap_or_default(),
            truncate_str(&result, 60),
        ]);
    }
    table
}
