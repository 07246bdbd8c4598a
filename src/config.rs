//! Render configuration, loadable from TOML.
//!
//! ```toml
//! line_numbers = true
//! gutter_width = 4
//!
//! [theme]
//! added = "#3fb950"
//! removed = "#f85149"
//! ```
//!
//! Every field is optional; missing fields take the [`Default`] values.

use crate::error::DiffError;
use crate::style::{Modifiers, Rgb, Style};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options shared by all renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Show line-number gutters.
    pub line_numbers: bool,
    /// Minimum width of each line-number gutter, in columns.
    pub gutter_width: usize,
    /// Terminal width used when the real size cannot be queried.
    pub fallback_width: u16,
    /// Emit ANSI colors in terminal output.
    pub color: bool,
    /// Spaces per tab in terminal output.
    pub tab_width: usize,
    /// Shown instead of a diff when both inputs are empty.
    pub empty_message: String,
    /// Shown when the output area has been cleared.
    pub cleared_message: String,
    /// Colors for each row kind.
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            line_numbers: true,
            gutter_width: 4,
            fallback_width: 120,
            color: true,
            tab_width: 4,
            empty_message: "Please enter text to compare.".to_string(),
            cleared_message: "Result will appear here...".to_string(),
            theme: Theme::default(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, DiffError> {
        let config: Self = toml::from_str(s)?;
        // Colors are validated eagerly
        config.theme.resolve()?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DiffError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| DiffError::read_config(path, e))?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }
}

/// Theme colors as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Added lines.
    pub added: String,
    /// Removed lines.
    pub removed: String,
    /// Unchanged lines.
    pub same: String,
    /// Line-number gutters and separators.
    pub gutter: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            added: "#3fb950".to_string(),
            removed: "#f85149".to_string(),
            same: "#c9d1d9".to_string(),
            gutter: "#6e7681".to_string(),
        }
    }
}

/// A [`Theme`] with every color parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTheme {
    /// Style for added lines.
    pub added: Style,
    /// Style for removed lines.
    pub removed: Style,
    /// Style for unchanged lines.
    pub same: Style,
    /// Style for gutters.
    pub gutter: Style,
}

impl Theme {
    /// Parse every color.
    pub fn resolve(&self) -> Result<ResolvedTheme, DiffError> {
        Ok(ResolvedTheme {
            added: Style::fg(self.added.parse()?).with_modifiers(Modifiers::BOLD),
            removed: Style::fg(self.removed.parse()?),
            same: Style::fg(self.same.parse::<Rgb>()?),
            gutter: Style::fg(self.gutter.parse()?).with_modifiers(Modifiers::DIM),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_resolve() {
        let theme = RenderConfig::default().theme.resolve().unwrap();
        assert_eq!(theme.added.fg, Rgb::from_u32(0x3fb950));
        assert!(theme.gutter.modifiers.contains(Modifiers::DIM));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RenderConfig::from_toml_str(
            r##"
            line_numbers = false

            [theme]
            added = "#00ff00"
            "##,
        )
        .unwrap();

        assert!(!config.line_numbers);
        assert_eq!(config.gutter_width, 4);
        assert_eq!(config.theme.added, "#00ff00");
        assert_eq!(config.theme.removed, Theme::default().removed);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(RenderConfig::from_toml_str("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_invalid_color_rejected() {
        let err = RenderConfig::from_toml_str("[theme]\nremoved = \"crimson\"").unwrap_err();
        assert!(matches!(err, DiffError::InvalidColor(ref c) if c == "crimson"));
    }

    #[test]
    fn test_bad_toml() {
        let err = RenderConfig::from_toml_str("line_numbers = maybe").unwrap_err();
        assert!(matches!(err, DiffError::TomlParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "gutter_width = 6\ncolor = false").unwrap();

        let config = RenderConfig::load(file.path()).unwrap();
        assert_eq!(config.gutter_width, 6);
        assert!(!config.color);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DiffError::ReadConfig { .. }));
    }

    #[test]
    fn test_roundtrip_serialize() {
        let config = RenderConfig::default();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(RenderConfig::from_toml_str(&text).unwrap(), config);
    }
}
