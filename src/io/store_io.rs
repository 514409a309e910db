use std::fs;
use std::io;
use std::path::Path;

use crate::io::paths::TASKS_FILE;
use crate::model::task::TaskItem;

/// Read the persisted task list from `tasks.json` in the data directory.
/// A missing file or unparsable content yields an empty list; persistence
/// read errors never reach the caller.
pub fn load_tasks(data_dir: &Path) -> Vec<TaskItem> {
    let path = data_dir.join(TASKS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Vec::new(),
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// Serialize the full list and replace `tasks.json` atomically: write to a
/// tempfile in the same directory, then persist over the target. Saves are
/// whole-file and sequential, so the last write always wins.
pub fn save_tasks(data_dir: &Path, tasks: &[TaskItem]) -> io::Result<()> {
    fs::create_dir_all(data_dir)?;
    let content = serde_json::to_string_pretty(tasks)?;
    let tmp = tempfile::NamedTempFile::new_in(data_dir)?;
    fs::write(tmp.path(), content)?;
    tmp.persist(data_dir.join(TASKS_FILE))
        .map_err(|e| e.error)?;
    Ok(())
}
