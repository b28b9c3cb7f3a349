//! Screen rendering for menus and error notices.
//!
//! Functions here return lines instead of printing so that navigation can
//! send them through whatever `Console` it was given.

use crate::ui::primitives::rule::RuleChar;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

use super::node::MenuNode;

pub const INVALID_INPUT_MESSAGE: &str = "Error: invalid input, please try again";

/// Visual choices for rendered screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Rule width in columns
    pub width: usize,
    pub unicode: bool,
    pub color: bool,
}

impl Default for Style {
    /// Plain ASCII at the classic width; safe for pipes and logs.
    fn default() -> Self {
        Self {
            width: theme::DEFAULT_WIDTH,
            unicode: false,
            color: false,
        }
    }
}

/// Lines for one menu screen: framed title, then one row per selector.
pub fn render_menu<A>(node: &MenuNode<A>, style: &Style) -> Vec<String> {
    let rule = ColoredText::dim(RuleChar::Horizontal.line(style.width, style.unicode))
        .render(style.color);
    let title = ColoredText::title(node.title()).bold().render(style.color);

    let mut lines = vec![String::new(), rule.clone(), title, rule];
    for (selector, label) in node.selectors() {
        lines.push(format!("  {}) {}", selector, label));
    }
    lines
}

/// Lines for the notice shown after unrecognised input.
pub fn render_invalid_input(style: &Style) -> Vec<String> {
    let rule = RuleChar::Alert.line(style.width, style.unicode);
    vec![
        String::new(),
        rule.clone(),
        ColoredText::error(INVALID_INPUT_MESSAGE).render(style.color),
        rule,
    ]
}
