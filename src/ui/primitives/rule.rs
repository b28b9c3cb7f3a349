use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleChar {
    /// Frames the menu title
    Horizontal,
    /// Frames error notices
    Alert,
}

impl RuleChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, RuleChar::Horizontal) => theme::rules::HORIZONTAL,
            (true, RuleChar::Alert) => theme::rules::ALERT,
            (false, RuleChar::Horizontal) => theme::rules_ascii::HORIZONTAL,
            (false, RuleChar::Alert) => theme::rules_ascii::ALERT,
        }
    }

    /// Repeat the rule character to fill `width` columns.
    pub fn line(&self, width: usize, supports_unicode: bool) -> String {
        let ch = self.render(supports_unicode);
        let cols = UnicodeWidthStr::width(ch).max(1);
        ch.repeat(width / cols)
    }
}
