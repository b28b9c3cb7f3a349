//! Terminal presentation helpers: design tokens, colour and rules.

pub mod primitives;
pub mod terminal;
pub mod theme;

pub use terminal::{detect_capabilities, OutputStream, TerminalCapabilities};
