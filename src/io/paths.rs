use std::path::PathBuf;

/// File name of the persisted task list
pub const TASKS_FILE: &str = "tasks.json";

/// File name of the optional user config
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory: an explicit `-C` override wins, then the
/// platform data dir under `slate/`, then the current directory.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    match dirs::data_dir() {
        Some(base) => base.join("slate"),
        None => PathBuf::from("."),
    }
}
