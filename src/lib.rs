//! console-menu - numbered, nestable text menus
//!
//! Build a tree of [`MenuNode`]s whose entries are either your own leaf
//! values or further menus, then call [`MenuNode::run`] with a
//! [`Console`]. The user navigates by typing numbers, `b` to go back and
//! `q` to quit; `run` hands back the chosen leaf for you to act on.
//!
//! ```
//! use console_menu::{Action, MenuNode, Outcome, ScriptedConsole};
//!
//! let root = MenuNode::new("Main");
//! let tools = MenuNode::new("Tools");
//! tools.add_entry(Action::leaf("hammer"), "Hammer").unwrap();
//! root.add_entry(Action::leaf("coffee"), "Coffee").unwrap();
//! root.add_entry(Action::submenu(&tools), "Tools").unwrap();
//!
//! let mut console = ScriptedConsole::new(["2", "1"]);
//! assert_eq!(root.run(&mut console).unwrap(), Outcome::Leaf("hammer"));
//! ```

pub mod config;
pub mod error;
pub mod menu;
pub mod ui;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning};
pub use error::{EntryProblem, MenuError, MenuResult};
pub use menu::{
    callback, Action, Builtin, Callback, Console, Entry, MenuNode, Outcome, ScriptedConsole,
    Selector, Settings, Style, Terminal,
};
