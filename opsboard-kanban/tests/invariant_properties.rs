//! Property-based tests for board invariants
//!
//! Random sequences of drags, moves, adds and deletes are applied to a board.
//! After every step each task id must sit in exactly one column, and moves
//! must never change the task count.

use opsboard_kanban::{
    execute_move, Board, Column, ColumnId, InteractionController, Task, TaskId,
};
use proptest::prelude::*;
use std::collections::HashSet;

const COLUMNS: [&str; 4] = ["todo", "inprogress", "review", "done"];

#[derive(Debug, Clone)]
enum Step {
    /// Drag task `n` and drop on target `m` (task or column, possibly bogus)
    Drag { task: usize, target: usize },
    /// Direct move to a column/index
    Move { task: usize, column: usize, index: usize },
    /// Drag task `n`, then release outside any target
    Cancel { task: usize },
    Add { column: usize, index: usize },
    Delete { task: usize },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => (0..12usize, 0..20usize).prop_map(|(task, target)| Step::Drag { task, target }),
        3 => (0..12usize, 0..5usize, 0..8usize)
            .prop_map(|(task, column, index)| Step::Move { task, column, index }),
        1 => (0..12usize).prop_map(|task| Step::Cancel { task }),
        1 => (0..4usize, 0..8usize).prop_map(|(column, index)| Step::Add { column, index }),
        1 => (0..12usize).prop_map(|task| Step::Delete { task }),
    ]
}

/// Board with `sizes[i]` tasks in column i, ids t0..tn
fn seeded(sizes: &[usize]) -> Board {
    let mut next = 0;
    let columns = COLUMNS
        .iter()
        .zip(sizes)
        .map(|(id, &size)| {
            let tasks = (0..size)
                .map(|_| {
                    let task = Task::new("Task", "Alex").with_id(format!("t{}", next));
                    next += 1;
                    task
                })
                .collect();
            Column::new(*id, *id).with_tasks(tasks)
        })
        .collect();
    Board::new(columns).unwrap()
}

fn task_id(n: usize) -> TaskId {
    TaskId::from(format!("t{}", n))
}

/// Targets 0..12 are task ids, 12..16 column ids, the rest bogus
fn target_id(n: usize) -> String {
    match n {
        0..=11 => format!("t{}", n),
        12..=15 => COLUMNS[n - 12].to_string(),
        _ => format!("ghost-{}", n),
    }
}

/// Column 4 does not exist, which exercises the restore path
fn column_id(n: usize) -> ColumnId {
    COLUMNS
        .get(n)
        .map(|c| ColumnId::from(*c))
        .unwrap_or_else(|| ColumnId::from("archive"))
}

fn assert_unique(board: &Board) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for task in board.tasks() {
        prop_assert!(seen.insert(task.id.clone()), "duplicate task {}", task.id);
    }
    prop_assert_eq!(seen.len(), board.task_count());
    prop_assert!(board.validate().is_ok());
    Ok(())
}

proptest! {
    /// Property: every reachable board keeps each task in exactly one slot,
    /// and only add/delete change the count
    #[test]
    fn prop_placement_and_count_invariants(
        sizes in prop::collection::vec(0..4usize, 4),
        steps in prop::collection::vec(step(), 1..40),
    ) {
        let mut board = seeded(&sizes);
        let mut controller = InteractionController::new();
        let mut added = 0usize;

        for step in steps {
            let before = board.task_count();
            let mut expected = before;

            match step {
                Step::Drag { task, target } => {
                    controller.drag_start(task_id(task));
                    let target = target_id(target);
                    controller.drag_end(&mut board, Some(&target));
                    prop_assert!(!controller.is_dragging());
                }
                Step::Move { task, column, index } => {
                    let _ = execute_move(&mut board, &task_id(task), &column_id(column), index);
                }
                Step::Cancel { task } => {
                    let snapshot = board.clone();
                    controller.drag_start(task_id(task));
                    controller.drag_end(&mut board, None);
                    prop_assert_eq!(&board, &snapshot);
                }
                Step::Add { column, index } => {
                    let task = Task::new("New", "Alex").with_id(format!("n{}", added));
                    added += 1;
                    board.insert_task(task, &column_id(column), index).unwrap();
                    expected += 1;
                }
                Step::Delete { task } => {
                    if board.remove_task(&task_id(task)).is_ok() {
                        expected -= 1;
                    }
                }
            }

            prop_assert_eq!(board.task_count(), expected);
            assert_unique(&board)?;
        }
    }

    /// Property: dropping a task onto itself never changes the board
    #[test]
    fn prop_self_drop_is_noop(
        sizes in prop::collection::vec(1..5usize, 4),
        pick in 0..16usize,
    ) {
        let mut board = seeded(&sizes);
        let total = board.task_count();
        let id = task_id(pick % total);
        let before = board.clone();

        let mut controller = InteractionController::new();
        controller.drag_start(id.clone());
        controller.drag_end(&mut board, Some(id.as_str()));

        prop_assert_eq!(board, before);
    }

    /// Property: dropping on a column puts the task last in that column
    #[test]
    fn prop_column_drop_appends(
        sizes in prop::collection::vec(0..5usize, 4),
        pick in 0..20usize,
        column in 0..4usize,
    ) {
        let mut board = seeded(&sizes);
        let total = board.task_count();
        prop_assume!(total > 0);
        let id = task_id(pick % total);
        let target = COLUMNS[column];

        let mut controller = InteractionController::new();
        controller.drag_start(id.clone());
        controller.drag_end(&mut board, Some(target));

        let lane = board.column(&ColumnId::from(target)).unwrap();
        prop_assert_eq!(&lane.tasks.last().unwrap().id, &id);
        prop_assert_eq!(board.task_count(), total);
    }
}
