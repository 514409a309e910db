//! Operations on the week board. Each mutation targets the currently
//! selected day's collection and fails with `NoDaySelected` when nothing
//! is selected.

use crate::model::board::{Board, Day};
use crate::model::task::TaskItem;
use crate::ops::list_ops::{self, StoreError};

/// Make `day` the active collection.
pub fn select_day(board: &mut Board, day: Day) {
    board.current = Some(day);
}

pub fn add_task(board: &mut Board, text: &str) -> Result<(), StoreError> {
    let tasks = current_mut(board)?;
    list_ops::add_task(tasks, text)
}

pub fn toggle_task(board: &mut Board, index: usize) -> Result<(), StoreError> {
    let tasks = current_mut(board)?;
    list_ops::toggle_task(tasks, index)
}

pub fn delete_task(board: &mut Board, index: usize) -> Result<TaskItem, StoreError> {
    let tasks = current_mut(board)?;
    list_ops::delete_task(tasks, index)
}

pub fn apply_order(board: &mut Board, order: &[usize]) -> Result<(), StoreError> {
    let tasks = current_mut(board)?;
    list_ops::apply_order(tasks, order)
}

fn current_mut(board: &mut Board) -> Result<&mut Vec<TaskItem>, StoreError> {
    board.current_tasks_mut().ok_or(StoreError::NoDaySelected)
}
