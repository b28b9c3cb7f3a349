//! Selectors: the keys a user types to pick a row.
//!
//! Numbered entries and builtins live in disjoint spaces: an item selector
//! is always a positive integer, a builtin is always one of the reserved
//! letter tokens.

use std::fmt;

/// Always-available commands injected by the menu itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Builtin {
    /// Return to the parent menu (non-root menus only)
    Back,
    /// Leave the menu tree
    Quit,
}

impl Builtin {
    pub const ALL: [Builtin; 2] = [Builtin::Back, Builtin::Quit];

    pub fn token(&self) -> &'static str {
        match self {
            Builtin::Back => "b",
            Builtin::Quit => "q",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Builtin::Back => "back",
            Builtin::Quit => "quit",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.token() == token)
    }
}

/// Key of one row in the merged selector table.
///
/// The derived ordering puts every `Item` before any `Builtin`, items in
/// ascending number order and builtins in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Selector {
    Item(usize),
    Builtin(Builtin),
}

impl Selector {
    /// Parse trimmed user input.
    ///
    /// Accepts a builtin token or the canonical decimal form of a positive
    /// integer. `"01"`, `"+1"` and `"0"` are rejected so that exactly one
    /// spelling selects each row.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(builtin) = Builtin::from_token(input) {
            return Some(Selector::Builtin(builtin));
        }

        let bytes = input.as_bytes();
        match bytes.first() {
            Some(b'1'..=b'9') if bytes.iter().all(u8::is_ascii_digit) => {
                input.parse().ok().map(Selector::Item)
            }
            _ => None,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Item(n) => write!(f, "{}", n),
            Selector::Builtin(b) => f.write_str(b.token()),
        }
    }
}

impl From<Builtin> for Selector {
    fn from(builtin: Builtin) -> Self {
        Selector::Builtin(builtin)
    }
}
