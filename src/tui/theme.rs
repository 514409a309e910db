use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub green: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x5F, 0xD7, 0xAF),
            dim: Color::Rgb(0x6A, 0x6A, 0x80),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            green: Color::Rgb(0x50, 0xC8, 0x78),
            selection_bg: Color::Rgb(0x28, 0x30, 0x40),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Build a theme from config color overrides, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, hex) in &ui.colors {
            let Some(color) = parse_hex_color(hex) else {
                continue;
            };
            match name.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                _ => {}
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#FF0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("00FF00"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn overrides_apply_and_unknown_keys_are_ignored() {
        let mut colors = HashMap::new();
        colors.insert("highlight".to_string(), "#123456".to_string());
        colors.insert("no_such_slot".to_string(), "#000000".to_string());
        colors.insert("red".to_string(), "bogus".to_string());
        let ui = UiConfig {
            start_view: None,
            colors,
        };
        let theme = Theme::from_config(&ui);
        assert_eq!(theme.highlight, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.red, Theme::default().red);
    }
}
