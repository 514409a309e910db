use std::collections::HashMap;

use serde::Deserialize;

/// Optional user config, read from `config.toml` in the data directory
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Which view opens first: "list" or "week"
    #[serde(default)]
    pub start_view: Option<String>,
    /// Color overrides, hex strings keyed by palette slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.ui.start_view.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn colors_and_start_view() {
        let config: Config = toml::from_str(
            r##"
[ui]
start_view = "week"

[ui.colors]
highlight = "#FB4196"
"##,
        )
        .unwrap();
        assert_eq!(config.ui.start_view.as_deref(), Some("week"));
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#FB4196");
    }
}
