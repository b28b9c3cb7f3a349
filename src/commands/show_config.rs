use std::io::Write;

use anyhow::Result;
use console_menu::Config;

use crate::output::write_event;

pub fn cmd_config<W: Write>(config: &Config, json: bool, out: &mut W) -> Result<()> {
    if json {
        write_event(
            out,
            &serde_json::json!({
                "event": "data",
                "command": "config",
                "input": {
                    "prompt": config.input.prompt,
                    "error_delay_ms": config.input.error_delay_ms,
                },
                "display": {
                    "width": config.display.width,
                    "color": format!("{:?}", config.display.color).to_lowercase(),
                    "unicode": config.display.unicode,
                },
            }),
        )?;
    } else {
        write!(out, "{}", toml::to_string(config)?)?;
    }
    Ok(())
}
