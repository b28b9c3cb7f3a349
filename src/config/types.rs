//! Configuration type definitions

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::MenuResult;
use crate::menu::{Settings, Style, DEFAULT_ERROR_DELAY, DEFAULT_PROMPT};
use crate::ui::theme::DEFAULT_WIDTH;
use crate::ui::TerminalCapabilities;

use super::loader::{self, ConfigWarning};

/// Input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Prompt for menus that do not set their own
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Pause after an invalid selection, in milliseconds
    #[serde(default = "default_error_delay_ms")]
    pub error_delay_ms: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            error_delay_ms: default_error_delay_ms(),
        }
    }
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_error_delay_ms() -> u64 {
    DEFAULT_ERROR_DELAY.as_millis() as u64
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Rule width in columns (capped at the terminal width)
    #[serde(default = "default_width")]
    pub width: usize,

    #[serde(default)]
    pub color: ColorMode,

    /// Draw rules with box-drawing characters
    #[serde(default)]
    pub unicode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            color: ColorMode::default(),
            unicode: false,
        }
    }
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub const VALUES: &'static [&'static str] = &["auto", "always", "never"];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MenuResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MenuResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Runtime settings for a terminal with the given capabilities.
    pub fn settings(&self, caps: &TerminalCapabilities) -> Settings {
        let color = match self.display.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => caps.supports_color,
        };
        let width = self.display.width.min(usize::from(caps.width)).max(1);

        Settings::default()
            .with_prompt(self.input.prompt.clone())
            .with_error_delay(Duration::from_millis(self.input.error_delay_ms))
            .with_style(Style {
                width,
                unicode: self.display.unicode && caps.supports_unicode,
                color,
            })
    }
}
