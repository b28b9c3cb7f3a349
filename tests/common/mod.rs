//! Common test utilities for navigation and scenario tests.
//!
//! - `sample_tree`: a two-level menu tree with string leaves
//! - `fast_settings`: default settings without the error pause
//! - `assert_shown!`: checks a console transcript for a line

#![allow(dead_code)]

use std::time::Duration;

use console_menu::{Action, MenuNode, Settings};

/// Root: 1) Coffee 2) Tea 3) Tools(submenu)
/// Tools: 1) Hammer 2) Wrench
pub struct SampleTree {
    pub root: MenuNode<&'static str>,
    pub tools: MenuNode<&'static str>,
}

pub fn sample_tree() -> SampleTree {
    let tools = MenuNode::with_entries(
        "Tools",
        Some("Tool: "),
        vec![
            (Action::leaf("hammer"), "Hammer"),
            (Action::leaf("wrench"), "Wrench"),
        ],
    )
    .unwrap();

    let root = MenuNode::with_entries(
        "Main",
        None,
        vec![
            (Action::leaf("coffee"), "Coffee"),
            (Action::leaf("tea"), "Tea"),
            (Action::submenu(&tools), "Tools"),
        ],
    )
    .unwrap();

    SampleTree { root, tools }
}

pub fn fast_settings() -> Settings {
    Settings::default().with_error_delay(Duration::ZERO)
}

/// Assert that a console transcript contains a line exactly `times` times.
#[macro_export]
macro_rules! assert_shown {
    ($console:expr, $line:expr, $times:expr) => {
        let count = $console.count_lines($line);
        assert_eq!(
            count,
            $times,
            "Expected line {:?} {} time(s), saw {}.\nTranscript:\n{}",
            $line,
            $times,
            count,
            $console.transcript()
        );
    };
}
