use serde::{Deserialize, Serialize};

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Display text (trimmed, non-empty)
    pub text: String,
    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

impl TaskItem {
    /// Create a new, not-yet-completed item. Text validation happens in
    /// `ops::list_ops::add_task`, not here.
    pub fn new(text: impl Into<String>) -> Self {
        TaskItem {
            text: text.into(),
            completed: false,
        }
    }
}
