//! The navigation loop behind `MenuNode::run`.
//!
//! Each screen cycles display → read → validate until the input names a
//! row. Entering a submenu or going back swaps the current node and starts
//! a fresh cycle there; a leaf or `q` ends the whole run.

use tracing::{debug, trace};

use crate::error::MenuResult;

use super::action::Outcome;
use super::console::Console;
use super::node::{MenuNode, Step};
use super::render::{render_invalid_input, render_menu};
use super::selector::Selector;
use super::settings::Settings;

impl<A: Clone> MenuNode<A> {
    /// Navigate from this node with default settings.
    ///
    /// Returns the chosen leaf without invoking it, or `Outcome::Quit` when
    /// the user quits or input ends. Only console I/O failures are errors.
    pub fn run<C: Console + ?Sized>(&self, console: &mut C) -> MenuResult<Outcome<A>> {
        self.run_with(console, &Settings::default())
    }

    /// Navigate from this node with explicit settings.
    pub fn run_with<C: Console + ?Sized>(
        &self,
        console: &mut C,
        settings: &Settings,
    ) -> MenuResult<Outcome<A>> {
        let mut current = self.clone();
        loop {
            match read_step(&current, console, settings)? {
                Step::Leaf(value) => {
                    debug!(menu = %current.title(), "resolved leaf action");
                    return Ok(Outcome::Leaf(value));
                }
                Step::Quit => {
                    debug!(menu = %current.title(), "quit");
                    return Ok(Outcome::Quit);
                }
                Step::Enter(child) => {
                    debug!(from = %current.title(), to = %child.title(), "entering submenu");
                    current = child;
                }
                Step::Back(parent) => {
                    debug!(from = %current.title(), to = %parent.title(), "back to parent");
                    current = parent;
                }
            }
        }
    }
}

/// Show `node` until a valid selection arrives and return where it leads.
fn read_step<A: Clone, C: Console + ?Sized>(
    node: &MenuNode<A>,
    console: &mut C,
    settings: &Settings,
) -> MenuResult<Step<A>> {
    let prompt = node.prompt().unwrap_or_else(|| settings.prompt.clone());

    loop {
        for line in render_menu(node, &settings.style) {
            console.write_line(&line)?;
        }

        let Some(raw) = console.read_line(&prompt)? else {
            debug!(menu = %node.title(), "end of input, treating as quit");
            return Ok(Step::Quit);
        };

        let input = raw.trim();
        if let Some(step) = Selector::parse(input).and_then(|s| node.step(s)) {
            return Ok(step);
        }

        trace!(menu = %node.title(), input, "rejected selection");
        for line in render_invalid_input(&settings.style) {
            console.write_line(&line)?;
        }
        console.sleep(settings.error_delay);
    }
}
