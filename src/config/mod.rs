//! Configuration module for console-menu
//!
//! Settings are resolved in this order:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (CONSOLE_MENU_*)
//! 3. Project config (./console-menu.toml)
//! 4. User config (<config dir>/console-menu/config.toml)
//! 5. Built-in defaults (lowest priority)

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{
    discover, user_config_path, with_env_overrides, with_env_overrides_from, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{ColorMode, Config, DisplayConfig, InputConfig};
