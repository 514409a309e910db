//! The closed command set the presentation layers dispatch. Both the CLI and
//! the TUI build `Action` values instead of reaching into the collections
//! directly, so the store has one mutation entry point per variant.

use crate::model::board::{Board, Day};
use crate::model::task::TaskItem;
use crate::ops::board_ops;
use crate::ops::list_ops::{self, StoreError};

/// One user-initiated mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(usize),
    Delete(usize),
    Reorder(Vec<usize>),
    SelectDay(Day),
}

/// Apply an action to the flat list. `SelectDay` does not apply to this
/// variant and is rejected.
pub fn apply_to_list(tasks: &mut Vec<TaskItem>, action: &Action) -> Result<(), StoreError> {
    match action {
        Action::Add(text) => list_ops::add_task(tasks, text),
        Action::Toggle(index) => list_ops::toggle_task(tasks, *index),
        Action::Delete(index) => list_ops::delete_task(tasks, *index).map(|_| ()),
        Action::Reorder(order) => list_ops::apply_order(tasks, order),
        Action::SelectDay(_) => Err(StoreError::NoDaySelected),
    }
}

/// Apply an action to the week board's selected day.
pub fn apply_to_board(board: &mut Board, action: &Action) -> Result<(), StoreError> {
    match action {
        Action::Add(text) => board_ops::add_task(board, text),
        Action::Toggle(index) => board_ops::toggle_task(board, *index),
        Action::Delete(index) => board_ops::delete_task(board, *index).map(|_| ()),
        Action::Reorder(order) => board_ops::apply_order(board, order),
        Action::SelectDay(day) => {
            board_ops::select_day(board, *day);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_reducer_covers_all_mutations() {
        let mut tasks = Vec::new();
        apply_to_list(&mut tasks, &Action::Add("one".into())).unwrap();
        apply_to_list(&mut tasks, &Action::Add("two".into())).unwrap();
        apply_to_list(&mut tasks, &Action::Toggle(0)).unwrap();
        assert!(tasks[0].completed);
        apply_to_list(&mut tasks, &Action::Reorder(vec![1, 0])).unwrap();
        assert_eq!(tasks[0].text, "two");
        apply_to_list(&mut tasks, &Action::Delete(0)).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "one");
    }

    #[test]
    fn list_rejects_select_day() {
        let mut tasks = Vec::new();
        assert_eq!(
            apply_to_list(&mut tasks, &Action::SelectDay(Day::Mon)),
            Err(StoreError::NoDaySelected)
        );
    }

    #[test]
    fn board_reducer_routes_through_selected_day() {
        let mut board = Board::new();
        apply_to_board(&mut board, &Action::SelectDay(Day::Tue)).unwrap();
        apply_to_board(&mut board, &Action::Add("Gym".into())).unwrap();
        assert_eq!(board.tasks(Day::Tue).len(), 1);
        assert!(board.tasks(Day::Mon).is_empty());
    }

    #[test]
    fn board_mutation_without_selection_fails() {
        let mut board = Board::new();
        assert_eq!(
            apply_to_board(&mut board, &Action::Add("Gym".into())),
            Err(StoreError::NoDaySelected)
        );
    }

    #[test]
    fn failed_action_leaves_state_unchanged() {
        let mut tasks = vec![TaskItem::new("only")];
        assert!(apply_to_list(&mut tasks, &Action::Toggle(5)).is_err());
        assert!(apply_to_list(&mut tasks, &Action::Reorder(vec![0, 0])).is_err());
        assert_eq!(tasks.len(), 1);
        assert!(!tasks[0].completed);
    }
}
