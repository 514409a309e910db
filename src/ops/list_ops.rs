use crate::model::task::TaskItem;

/// Error type for store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task cannot be empty")]
    EmptyText,
    #[error("index {index} out of bounds (list has {len} tasks)")]
    OutOfBounds { index: usize, len: usize },
    #[error("new order is not a permutation of the current list")]
    NotAPermutation,
    #[error("no day selected")]
    NoDaySelected,
}

/// Append a new uncompleted task. The text is trimmed first; blank text is a
/// validation error and leaves the collection unchanged.
pub fn add_task(tasks: &mut Vec<TaskItem>, text: &str) -> Result<(), StoreError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(StoreError::EmptyText);
    }
    tasks.push(TaskItem::new(trimmed));
    Ok(())
}

/// Flip the completion flag on the task at `index`.
pub fn toggle_task(tasks: &mut [TaskItem], index: usize) -> Result<(), StoreError> {
    let len = tasks.len();
    let task = tasks
        .get_mut(index)
        .ok_or(StoreError::OutOfBounds { index, len })?;
    task.completed = !task.completed;
    Ok(())
}

/// Remove and return the task at `index`. Later tasks shift down by one.
pub fn delete_task(tasks: &mut Vec<TaskItem>, index: usize) -> Result<TaskItem, StoreError> {
    if index >= tasks.len() {
        return Err(StoreError::OutOfBounds {
            index,
            len: tasks.len(),
        });
    }
    Ok(tasks.remove(index))
}

/// Replace the collection with a permutation of itself: `order[i]` is the old
/// index of the task that ends up at position `i`. Rejected (collection left
/// untouched) unless `order` is a bijection over `0..len`.
pub fn apply_order(tasks: &mut Vec<TaskItem>, order: &[usize]) -> Result<(), StoreError> {
    if !is_permutation(order, tasks.len()) {
        return Err(StoreError::NotAPermutation);
    }
    let old = std::mem::take(tasks);
    let mut slots: Vec<Option<TaskItem>> = old.into_iter().map(Some).collect();
    for &old_idx in order {
        // is_permutation guarantees each slot is taken exactly once
        tasks.push(slots[old_idx].take().unwrap());
    }
    Ok(())
}

/// Check that `order` hits every index in `0..len` exactly once.
fn is_permutation(order: &[usize], len: usize) -> bool {
    if order.len() != len {
        return false;
    }
    let mut seen = vec![false; len];
    for &idx in order {
        if idx >= len || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(tasks: &[TaskItem]) -> Vec<&str> {
        tasks.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn add_trims_and_appends() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "  Buy milk  ").unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Buy milk");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn add_rejects_whitespace_only() {
        let mut tasks = vec![TaskItem::new("existing")];
        for blank in ["", "   ", "\t", " \n "] {
            assert_eq!(add_task(&mut tasks, blank), Err(StoreError::EmptyText));
        }
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn add_scenario_with_blank_in_the_middle() {
        let mut tasks = Vec::new();
        add_task(&mut tasks, "Buy milk").unwrap();
        assert_eq!(add_task(&mut tasks, "  "), Err(StoreError::EmptyText));
        add_task(&mut tasks, "Walk dog").unwrap();
        assert_eq!(texts(&tasks), vec!["Buy milk", "Walk dog"]);
        assert!(tasks.iter().all(|t| !t.completed));
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b")];
        toggle_task(&mut tasks, 1).unwrap();
        assert!(tasks[1].completed);
        toggle_task(&mut tasks, 1).unwrap();
        assert!(!tasks[1].completed);
        assert!(!tasks[0].completed);
    }

    #[test]
    fn toggle_out_of_bounds() {
        let mut tasks = vec![TaskItem::new("a")];
        assert_eq!(
            toggle_task(&mut tasks, 1),
            Err(StoreError::OutOfBounds { index: 1, len: 1 })
        );
    }

    #[test]
    fn delete_shifts_later_tasks_left() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b"), TaskItem::new("c")];
        let removed = delete_task(&mut tasks, 1).unwrap();
        assert_eq!(removed.text, "b");
        assert_eq!(texts(&tasks), vec!["a", "c"]);
    }

    #[test]
    fn delete_out_of_bounds() {
        let mut tasks: Vec<TaskItem> = Vec::new();
        assert_eq!(
            delete_task(&mut tasks, 0),
            Err(StoreError::OutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn apply_order_permutes() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b"), TaskItem::new("c")];
        apply_order(&mut tasks, &[2, 0, 1]).unwrap();
        assert_eq!(texts(&tasks), vec!["c", "a", "b"]);
    }

    #[test]
    fn apply_order_identity_is_noop() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b")];
        apply_order(&mut tasks, &[0, 1]).unwrap();
        assert_eq!(texts(&tasks), vec!["a", "b"]);
    }

    #[test]
    fn apply_order_preserves_multiset() {
        let mut tasks = vec![
            TaskItem::new("dup"),
            TaskItem::new("dup"),
            TaskItem::new("other"),
        ];
        tasks[1].completed = true;
        apply_order(&mut tasks, &[1, 2, 0]).unwrap();
        assert_eq!(texts(&tasks), vec!["dup", "other", "dup"]);
        assert!(tasks[0].completed);
        assert!(!tasks[2].completed);
    }

    #[test]
    fn apply_order_rejects_wrong_length() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b")];
        assert_eq!(
            apply_order(&mut tasks, &[0]),
            Err(StoreError::NotAPermutation)
        );
        assert_eq!(texts(&tasks), vec!["a", "b"]);
    }

    #[test]
    fn apply_order_rejects_duplicates_and_range() {
        let mut tasks = vec![TaskItem::new("a"), TaskItem::new("b")];
        assert_eq!(
            apply_order(&mut tasks, &[0, 0]),
            Err(StoreError::NotAPermutation)
        );
        assert_eq!(
            apply_order(&mut tasks, &[0, 2]),
            Err(StoreError::NotAPermutation)
        );
        assert_eq!(texts(&tasks), vec!["a", "b"]);
    }

    #[test]
    fn apply_order_empty_list() {
        let mut tasks: Vec<TaskItem> = Vec::new();
        apply_order(&mut tasks, &[]).unwrap();
        assert!(tasks.is_empty());
    }
}
