//! End-to-end drag scenarios against the board engine

use opsboard_kanban::{
    compute_move, seed, task::DeleteTask, Board, CancelReason, Column, ColumnId, DragOutcome,
    InteractionController, OperationProcessor, Task, TaskId,
};

fn task(id: &str) -> Task {
    Task::new(format!("Task {}", id), "Alex").with_id(id)
}

fn ids(board: &Board, column: &str) -> Vec<String> {
    board
        .column(&ColumnId::from(column))
        .unwrap()
        .tasks
        .iter()
        .map(|t| t.id.to_string())
        .collect()
}

fn two_lane_board() -> Board {
    Board::new(vec![
        Column::new("todo", "To Do").with_tasks(vec![task("t1"), task("t2")]),
        Column::new("done", "Done"),
    ])
    .unwrap()
}

#[test]
fn test_column_then_task_drop_scenario() {
    let mut board = two_lane_board();
    let mut controller = InteractionController::new();

    controller.drag_start("t1");
    assert!(controller.drag_end(&mut board, Some("done")).moved());
    assert_eq!(ids(&board, "todo"), vec!["t2"]);
    assert_eq!(ids(&board, "done"), vec!["t1"]);

    controller.drag_start("t2");
    assert!(controller.drag_end(&mut board, Some("t1")).moved());
    assert!(ids(&board, "todo").is_empty());
    assert_eq!(ids(&board, "done"), vec!["t2", "t1"]);
}

#[test]
fn test_same_column_shift() {
    let mut board = Board::new(vec![Column::new("lane", "Lane")
        .with_tasks(vec![task("A"), task("B"), task("C"), task("D")])])
    .unwrap();

    let direct = compute_move(&board, &"A".into(), &"lane".into(), 2).unwrap();
    assert_eq!(ids(&direct, "lane"), vec!["B", "C", "A", "D"]);

    let mut controller = InteractionController::new();
    controller.drag_start("A");
    controller.drag_end(&mut board, Some("C"));
    assert_eq!(ids(&board, "lane"), vec!["B", "C", "A", "D"]);
}

#[test]
fn test_cross_column_drop_on_column_appends() {
    let mut board = seed::default_board();
    let mut controller = InteractionController::new();

    controller.drag_start("1");
    controller.drag_end(&mut board, Some("review"));
    assert_eq!(ids(&board, "review"), vec!["4", "1"]);
}

#[test]
fn test_cross_column_drop_on_task_inserts_before() {
    let mut board = seed::default_board();
    let mut controller = InteractionController::new();

    controller.drag_start("3");
    controller.drag_end(&mut board, Some("2"));
    assert_eq!(ids(&board, "todo"), vec!["1", "3", "2"]);
    assert!(ids(&board, "inprogress").is_empty());
}

#[test]
fn test_self_drop_is_idempotent() {
    let mut board = seed::default_board();
    let before = board.clone();
    let mut controller = InteractionController::new();

    controller.drag_start("2");
    let outcome = controller.drag_end(&mut board, Some("2"));
    assert_eq!(outcome, DragOutcome::NoOp { task: "2".into() });
    assert_eq!(board, before);
}

#[test]
fn test_unresolvable_target_leaves_board_identical() {
    let mut board = seed::default_board();
    let before = board.clone();
    let mut controller = InteractionController::new();

    controller.drag_start("4");
    let outcome = controller.drag_end(&mut board, Some("not-a-thing"));
    assert_eq!(
        outcome,
        DragOutcome::Cancelled {
            task: "4".into(),
            reason: CancelReason::UnresolvedTarget,
        }
    );
    assert_eq!(board, before);
    assert_eq!(
        serde_json::to_string(&board).unwrap(),
        serde_json::to_string(&before).unwrap()
    );
}

#[test]
fn test_delete_mid_drag_is_tolerated() {
    let mut board = seed::default_board();
    let mut controller = InteractionController::new();
    let mut processor = OperationProcessor::default();

    controller.drag_start("1");
    processor
        .process(&DeleteTask::new("1"), &mut board)
        .unwrap();
    assert!(controller.active_task(&board).is_none());

    let outcome = controller.drag_end(&mut board, Some("done"));
    assert_eq!(
        outcome,
        DragOutcome::Cancelled {
            task: "1".into(),
            reason: CancelReason::StaleTask,
        }
    );
    assert!(!board.contains_task(&TaskId::from("1")));
    assert_eq!(board.task_count(), 4);
    board.validate().unwrap();
    assert!(!controller.is_dragging());
}

#[test]
fn test_deleted_drop_target_cancels() {
    let mut board = seed::default_board();
    let mut controller = InteractionController::new();

    controller.drag_start("1");
    board.remove_task(&"4".into()).unwrap();
    let before = board.clone();

    let outcome = controller.drag_end(&mut board, Some("4"));
    assert!(matches!(
        outcome,
        DragOutcome::Cancelled {
            reason: CancelReason::UnresolvedTarget,
            ..
        }
    ));
    assert_eq!(board, before);
}

#[test]
fn test_controller_reusable_across_gestures() {
    let mut board = seed::default_board();
    let mut controller = InteractionController::new();

    for (task, target) in [("1", "done"), ("2", "done"), ("5", "todo"), ("1", "5")] {
        assert!(controller.drag_start(task));
        controller.drag_end(&mut board, Some(target));
    }

    assert_eq!(ids(&board, "todo"), vec!["1", "5"]);
    assert_eq!(ids(&board, "done"), vec!["2"]);
    assert_eq!(board.task_count(), 5);
    board.validate().unwrap();
}
