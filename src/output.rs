//! Output helpers for the binary: NDJSON events and config warnings.

use std::io::{self, Write};

use console_menu::ConfigWarning;

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

pub fn write_config_warnings(out: &mut impl Write, warnings: &[ConfigWarning]) -> io::Result<()> {
    for w in warnings {
        match w.line {
            Some(line) => writeln!(
                out,
                "⚠ Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )?,
            None => writeln!(out, "⚠ Unknown config key '{}' in {}", w.key, w.file.display())?,
        }

        if let Some(suggestion) = &w.suggestion {
            writeln!(out, "   Did you mean '{}'?", suggestion)?;
        }
    }
    Ok(())
}
