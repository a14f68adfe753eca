//! Color theme for the tree viewer
//!
//! Colors can be configured via a `tree_colors.toml` file in the current working directory.
//! If the file doesn't exist or is invalid, default colors are used.
//!
//! Example `tree_colors.toml`:
//! ```toml
//! root_node = 135, 206, 250   # Light sky blue
//! move_node = 255, 215, 0     # Gold
//! edge = 160, 160, 160        # Gray
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use ratatui::style::{Color, Modifier, Style};

const CONFIG_FILE: &str = "tree_colors.toml";

/// Color theme for the tree viewer
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub root_node: Color,
    pub move_node: Color,
    pub edge: Color,
    pub border: Color,
    pub text: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config_file().unwrap_or_else(Self::builtin)
    }
}

impl Theme {
    /// The colors used when no config file overrides them.
    pub fn builtin() -> Self {
        Self {
            root_node: Color::Rgb(135, 206, 250),
            move_node: Color::Rgb(255, 215, 0),
            edge: Color::Gray,
            border: Color::Gray,
            text: Color::White,
        }
    }

    /// Load theme from `tree_colors.toml` in the current working directory.
    /// Returns None if the file doesn't exist or can't be parsed.
    fn from_config_file() -> Option<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(config_path).ok()?;
        let theme = Self::from_config_str(&contents);
        if theme.is_none() {
            debug!("ignoring incomplete {}", CONFIG_FILE);
        }
        theme
    }

    /// Parses `key = r, g, b` lines. All three node colors must be present.
    pub fn from_config_str(contents: &str) -> Option<Self> {
        let mut colors = HashMap::new();

        for line in contents.lines() {
            // Drop trailing comments, then skip blank lines
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                if let Some(color) = parse_rgb(value) {
                    colors.insert(key.trim().to_string(), color);
                }
            }
        }

        let builtin = Self::builtin();
        Some(Self {
            root_node: *colors.get("root_node")?,
            move_node: *colors.get("move_node")?,
            edge: *colors.get("edge")?,
            border: builtin.border, // Not configurable for now
            text: builtin.text,     // Not configurable for now
        })
    }

    /// Style for a node label
    pub fn node_style(&self, is_root: bool) -> Style {
        let color = if is_root {
            self.root_node
        } else {
            self.move_node
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn edge_style(&self) -> Style {
        Style::default().fg(self.edge)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Parses "r, g, b" or "[r, g, b]"
fn parse_rgb(value: &str) -> Option<Color> {
    let rgb_str = value.trim().trim_start_matches('[').trim_end_matches(']');
    let rgb_parts: Vec<&str> = rgb_str.split(',').map(|s| s.trim()).collect();
    if rgb_parts.len() != 3 {
        return None;
    }

    let r = rgb_parts[0].parse::<u8>().ok()?;
    let g = rgb_parts[1].parse::<u8>().ok()?;
    let b = rgb_parts[2].parse::<u8>().ok()?;
    Some(Color::Rgb(r, g, b))
}
