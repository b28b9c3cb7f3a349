//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MenuError, MenuResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config};

/// Config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "console-menu.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config file: project, then user.
pub fn discover(project_root: Option<&Path>) -> Option<PathBuf> {
    if let Some(root) = project_root {
        let project_config = root.join(PROJECT_CONFIG_FILE);
        if project_config.exists() {
            return Some(project_config);
        }
    }

    user_config_path().filter(|p| p.exists())
}

/// `<config dir>/console-menu/config.toml`, when the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("console-menu").join("config.toml"))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    if let Some(path) = discover(project_root) {
        match Config::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "ignoring unreadable config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (CONSOLE_MENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |k| std::env::var(k).ok(), &mut std::io::stderr())
}

/// Apply overrides read through `get_env`, warning about bad values on `writer`.
pub fn with_env_overrides_from<W: Write>(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
    writer: &mut W,
) -> Config {
    const NUMBER: &[&str] = &["a whole number"];

    if let Some(prompt) = get_env("CONSOLE_MENU_PROMPT") {
        config.input.prompt = prompt;
    }

    if let Some(delay) = get_env("CONSOLE_MENU_ERROR_DELAY_MS") {
        config.input.error_delay_ms = EnvVarValidator::new("CONSOLE_MENU_ERROR_DELAY_MS", NUMBER)
            .parse_with_writer(
                &delay,
                |s| s.trim().parse().ok(),
                config.input.error_delay_ms,
                writer,
            );
    }

    if let Some(color) = get_env("CONSOLE_MENU_COLOR") {
        config.display.color = EnvVarValidator::new("CONSOLE_MENU_COLOR", ColorMode::VALUES)
            .parse_with_writer(&color, ColorMode::parse, config.display.color, writer);
    }

    if let Some(width) = get_env("CONSOLE_MENU_WIDTH") {
        config.display.width = EnvVarValidator::new("CONSOLE_MENU_WIDTH", NUMBER)
            .parse_with_writer(
                &width,
                |s| s.trim().parse().ok().filter(|w: &usize| *w > 0),
                config.display.width,
                writer,
            );
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "input",
        "prompt",
        "error_delay_ms",
        "display",
        "width",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
