use crossterm::style::Color;

/// Design tokens for menu screens.
///
/// Design constraints:
/// - Only 3 semantic colors (`colors::*`)
/// - All rule characters must be sourced from this module
pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const TITLE: Color = Color::Cyan;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod rules {
    pub const HORIZONTAL: &str = "─";
    pub const ALERT: &str = "*";
}

pub mod rules_ascii {
    pub const HORIZONTAL: &str = "-";
    pub const ALERT: &str = "*";
}

/// Default rule width, in terminal columns.
pub const DEFAULT_WIDTH: usize = 50;
