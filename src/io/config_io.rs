use std::fs;
use std::path::Path;

use crate::io::paths::CONFIG_FILE;
use crate::model::config::Config;

/// Read `config.toml` from the data directory. The config is optional:
/// missing or malformed files fall back to defaults.
pub fn read_config(data_dir: &Path) -> Config {
    let path = data_dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Config::default(),
    };
    toml::from_str(&content).unwrap_or_default()
}
