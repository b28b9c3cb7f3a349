//! Error types for console-menu
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu construction and navigation
#[derive(Error, Debug)]
pub enum MenuError {
    /// An entry was rejected before it was stored
    #[error("invalid entry at index {index} ({label:?}): {reason}")]
    InvalidEntry {
        index: usize,
        label: String,
        reason: EntryProblem,
    },

    /// Reading from or writing to the console failed
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },
}

/// Why `add_entry` refused an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryProblem {
    /// Label is empty or only whitespace
    EmptyLabel,
    /// Label spans more than one line
    MultilineLabel,
    /// Submenu is already attached to another menu
    AlreadyAttached,
    /// Submenu is this menu or one of its ancestors
    Cycle,
}

impl std::fmt::Display for EntryProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            EntryProblem::EmptyLabel => "label must not be empty",
            EntryProblem::MultilineLabel => "label must fit on a single line",
            EntryProblem::AlreadyAttached => "submenu already has a parent menu",
            EntryProblem::Cycle => "submenu would contain itself",
        };
        f.write_str(msg)
    }
}

impl MenuError {
    /// Returns the rejected entry's problem, if this is an `InvalidEntry`.
    pub fn entry_problem(&self) -> Option<EntryProblem> {
        match self {
            MenuError::InvalidEntry { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}
