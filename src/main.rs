//! console-menu CLI - demo host for the menu library
//!
//! Usage: console-menu [COMMAND]
//!
//! Commands:
//!   demo    Navigate the sample menu tree (default)
//!   config  Print the effective configuration

mod cli;
mod commands;
mod output;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use console_menu::config::{with_env_overrides, Config};
use console_menu::ui::detect_capabilities;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;

    match cli.command.clone().unwrap_or(Commands::Demo { values: false }) {
        Commands::Demo { values } => {
            let settings = config.settings(&detect_capabilities(cli.menu_stream()));
            commands::demo::cmd_demo(values, cli.json, &settings)
        }
        Commands::Config => commands::show_config::cmd_config(&config, cli.json, &mut io::stdout()),
    }
}

/// Logs go to stderr so they never interleave with menu screens on stdout.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            output::write_config_warnings(&mut io::stderr(), &warnings)?;
            with_env_overrides(config)
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Config::load_or_default(cwd.as_deref())
        }
    };

    if let Some(color) = cli.color {
        config.display.color = color.into();
    }
    Ok(config)
}
