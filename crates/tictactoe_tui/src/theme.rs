//! Color theme for the terminal board.

use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tictactoe_engine::Mark;
use tracing::{debug, info, instrument};

/// Theme as written in a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    primary: Option<String>,
    accent: Option<String>,
    secondary: Option<String>,
    winning_bg: Option<String>,
    last_move_bg: Option<String>,
    grid: Option<String>,
}

/// Resolved colors used by the renderer.
///
/// Defaults follow a light palette: blue for X, yellow for O on white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    primary: Color,
    accent: Color,
    secondary: Color,
    winning_bg: Color,
    last_move_bg: Color,
    grid: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Rgb(0x19, 0x76, 0xd2),
            accent: Color::Rgb(0xfb, 0xc0, 0x2d),
            secondary: Color::Rgb(0xff, 0xff, 0xff),
            winning_bg: Color::Rgb(0xe5, 0xf4, 0xfd),
            last_move_bg: Color::Rgb(0xff, 0xf9, 0xe3),
            grid: Color::Rgb(0xda, 0xe8, 0xf5),
        }
    }
}

impl Theme {
    /// Parses a theme from TOML text, filling missing keys with defaults.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = toml::from_str(content)
            .map_err(|e| ThemeError::new(format!("Failed to parse theme: {}", e)))?;

        let defaults = Self::default();
        Ok(Self {
            primary: resolve("primary", file.primary, defaults.primary)?,
            accent: resolve("accent", file.accent, defaults.accent)?,
            secondary: resolve("secondary", file.secondary, defaults.secondary)?,
            winning_bg: resolve("winning_bg", file.winning_bg, defaults.winning_bg)?,
            last_move_bg: resolve("last_move_bg", file.last_move_bg, defaults.last_move_bg)?,
            grid: resolve("grid", file.grid, defaults.grid)?,
        })
    }

    /// Loads a theme from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        debug!("Loading theme from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ThemeError::new(format!("Failed to read theme file: {}", e)))?;

        let theme = Self::from_toml_str(&content)?;
        info!("Theme loaded");
        Ok(theme)
    }

    /// Color for X marks and general emphasis.
    pub fn primary(&self) -> Color {
        self.primary
    }

    /// Color for O marks.
    pub fn accent(&self) -> Color {
        self.accent
    }

    /// Background color.
    pub fn secondary(&self) -> Color {
        self.secondary
    }

    /// Background of cells on the winning line.
    pub fn winning_bg(&self) -> Color {
        self.winning_bg
    }

    /// Background of the most recently played cell.
    pub fn last_move_bg(&self) -> Color {
        self.last_move_bg
    }

    /// Color of the grid lines.
    pub fn grid(&self) -> Color {
        self.grid
    }

    /// Color a mark is drawn in.
    pub fn mark_color(&self, mark: Mark) -> Color {
        match mark {
            Mark::X => self.primary,
            Mark::O => self.accent,
        }
    }
}

fn resolve(key: &str, value: Option<String>, default: Color) -> Result<Color, ThemeError> {
    match value {
        None => Ok(default),
        Some(raw) => Color::from_str(raw.trim())
            .map_err(|e| ThemeError::new(format!("Invalid color for {}: {:?} ({})", key, raw, e))),
    }
}

/// Theme loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Theme error: {} at {}:{}", message, file, line)]
pub struct ThemeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeError {
    /// Creates a new theme error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let theme = Theme::from_toml_str("").expect("empty theme is valid");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_toml_str("primary = \"red\"\naccent = \"#00ff00\"\n")
            .expect("valid theme");
        assert_eq!(theme.primary(), Color::Red);
        assert_eq!(theme.accent(), Color::Rgb(0, 255, 0));
        assert_eq!(theme.grid(), Theme::default().grid());
    }

    #[test]
    fn test_mark_colors() {
        let theme = Theme::default();
        assert_eq!(theme.mark_color(Mark::X), theme.primary());
        assert_eq!(theme.mark_color(Mark::O), theme.accent());
    }

    #[test]
    fn test_bad_color_names_key() {
        let err = Theme::from_toml_str("grid = \"not-a-color\"").unwrap_err();
        assert!(err.message.contains("grid"), "message was {}", err.message);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Theme::from_toml_str("background = \"red\"").is_err());
    }
}
