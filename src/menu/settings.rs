//! Runtime knobs for navigation.

use std::time::Duration;

use super::render::Style;

/// Prompt used by menus that were not given one.
pub const DEFAULT_PROMPT: &str = "Choice: ";

/// Pause after the invalid-input notice.
pub const DEFAULT_ERROR_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prompt for menus without their own
    pub prompt: String,
    pub error_delay: Duration,
    pub style: Style,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            error_delay: DEFAULT_ERROR_DELAY,
            style: Style::default(),
        }
    }
}

impl Settings {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_error_delay(mut self, delay: Duration) -> Self {
        self.error_delay = delay;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}
