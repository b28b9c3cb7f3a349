//! CLI Argument Parsing
//!
//! Global flags (--json, --color, --config, --verbose) are inherited by all
//! subcommands. Running without a subcommand starts the callback demo.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use console_menu::ui::OutputStream;
use console_menu::ColorMode;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// console-menu - numbered, nestable text menus
#[derive(Parser, Debug)]
#[command(name = "console-menu")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'console-menu' without arguments for the demo menu.")]
pub struct Cli {
    /// Emit the result as one JSON line; menus are drawn on stderr
    #[arg(long, global = true)]
    pub json: bool,

    /// Colored output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    /// Config file (defaults to ./console-menu.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Menus go to stderr in JSON mode so stdout carries only the event.
    pub fn menu_stream(&self) -> OutputStream {
        if self.json {
            OutputStream::Stderr
        } else {
            OutputStream::Stdout
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Navigate the sample menu tree
    Demo {
        /// Use the value-returning sample instead of callbacks
        #[arg(long)]
        values: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["console-menu"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_cli_parse_demo_values() {
        let cli = Cli::try_parse_from(["console-menu", "demo", "--values"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Demo { values: true }));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "console-menu",
            "demo",
            "--json",
            "--color",
            "never",
            "-vv",
            "--config",
            "menu.toml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("menu.toml")));
    }

    #[test]
    fn test_json_mode_draws_menu_on_stderr() {
        let cli = Cli::try_parse_from(["console-menu", "demo", "--json"]).unwrap();
        assert_eq!(cli.menu_stream(), OutputStream::Stderr);

        let cli = Cli::try_parse_from(["console-menu", "demo"]).unwrap();
        assert_eq!(cli.menu_stream(), OutputStream::Stdout);
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["console-menu", "--color", "sometimes"]).is_err());
    }

    #[test]
    fn test_color_when_maps_to_config_mode() {
        assert_eq!(ColorMode::from(ColorWhen::Always), ColorMode::Always);
        assert_eq!(ColorMode::from(ColorWhen::Never), ColorMode::Never);
    }
}
