//! Hierarchical numbered menus.
//!
//! A [`MenuNode`] shows a framed title and its numbered entries, reads a
//! line, and resolves the choice. An entry is either a leaf (handed back to
//! the caller untouched) or another `MenuNode` (entered in place). Every
//! node offers `q`; attached nodes also offer `b`.
//!
//! # Module Structure
//!
//! - `node` - MenuNode data and tree linking
//! - `action` - Leaf/submenu actions and the navigation outcome
//! - `selector` - Numbered and builtin selectors
//! - `navigate` - The display/read/validate loop
//! - `render` - Screen formatting
//! - `console` - I/O capability and its implementations
//! - `settings` - Prompt, delay and style knobs

mod action;
mod console;
mod navigate;
mod node;
mod render;
mod selector;
mod settings;

pub use action::{callback, Action, Callback, Outcome};
pub use console::{Console, ScriptedConsole, Terminal};
pub use node::{Entry, MenuNode};
pub use render::{render_invalid_input, render_menu, Style, INVALID_INPUT_MESSAGE};
pub use selector::{Builtin, Selector};
pub use settings::{Settings, DEFAULT_ERROR_DELAY, DEFAULT_PROMPT};
