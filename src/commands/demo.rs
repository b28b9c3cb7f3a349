//! Sample menu trees and the `demo` command.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use console_menu::{
    callback, Action, Callback, Console, MenuNode, MenuResult, Outcome, Settings, Terminal,
};

use crate::output::write_event;

/// Root with five leaves and a nested three-leaf menu; leaves print a word.
pub fn callback_menu() -> MenuResult<MenuNode<Callback>> {
    let say_hello = callback(|| println!("hello"));

    let root = MenuNode::with_entries(
        "Please choose a useless option",
        None,
        vec![
            (Action::leaf(say_hello.clone()), "Item 1"),
            (Action::leaf(say_hello.clone()), "Item 2 does nothing"),
            (Action::leaf(say_hello.clone()), "Item 3 does about as much as item 2"),
            (Action::leaf(say_hello.clone()), "Item 4 dont do much"),
            (Action::leaf(say_hello), "Item 5 is another menu"),
        ],
    )?;

    let another = MenuNode::new("Please choose another useless option");
    another.add_entry(Action::leaf(printer("one")), "Item One")?;
    another.add_entry(Action::leaf(printer("two")), "Item Two")?;
    another.add_entry(Action::leaf(printer("three")), "Item Three")?;

    root.add_entry(Action::submenu(&another), "Do sub menu")?;
    Ok(root)
}

fn printer(text: &'static str) -> Callback {
    callback(move || println!("{}", text))
}

/// Flat menu whose leaves are plain values.
pub fn value_menu() -> MenuResult<MenuNode<&'static str>> {
    MenuNode::with_entries(
        "Please choose something... anything!",
        None,
        vec![
            (Action::leaf("foo"), "gimmie foo"),
            (Action::leaf("bar"), "gimmie bar"),
            (Action::leaf("baz"), "gimmie baz"),
        ],
    )
}

pub fn cmd_demo(values: bool, json: bool, settings: &Settings) -> Result<()> {
    if json {
        // Keep stdout clean for the JSON event.
        let mut console = Terminal::new(io::stdin().lock(), io::stderr());
        run_demo(values, true, &mut console, &mut io::stdout(), settings)
    } else {
        run_demo(values, false, &mut Terminal::stdio(), &mut io::stdout(), settings)
    }
}

pub fn run_demo<C, W>(
    values: bool,
    json: bool,
    console: &mut C,
    out: &mut W,
    settings: &Settings,
) -> Result<()>
where
    C: Console + ?Sized,
    W: Write,
{
    if values {
        let outcome = value_menu()?.run_with(console, settings)?;
        info!(quit = outcome.is_quit(), "value demo finished");
        if json {
            write_event(out, &result_event("values", &outcome, outcome.as_leaf().copied()))?;
        } else {
            writeln!(out, "you chose: {}", outcome.as_leaf().copied().unwrap_or("nothing"))?;
        }
        return Ok(());
    }

    let outcome = callback_menu()?.run_with(console, settings)?;
    info!(quit = outcome.is_quit(), "callback demo finished");
    if json {
        write_event(out, &result_event("callbacks", &outcome, None))?;
    } else {
        outcome.invoke();
    }
    Ok(())
}

fn result_event<A>(menu: &str, outcome: &Outcome<A>, value: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "event": "result",
        "command": "demo",
        "menu": menu,
        "outcome": if outcome.is_quit() { "quit" } else { "leaf" },
        "value": value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_menu::ScriptedConsole;
    use std::time::Duration;

    fn fast() -> Settings {
        Settings::default().with_error_delay(Duration::ZERO)
    }

    #[test]
    fn callback_menu_has_submenu_as_sixth_entry() {
        let root = callback_menu().unwrap();
        assert_eq!(root.len(), 6);
        assert_eq!(root.labels()[5], "Do sub menu");

        let sub = match root.entry(6).unwrap().action {
            Action::Submenu(node) => node,
            Action::Leaf(_) => panic!("expected submenu"),
        };
        assert!(sub.has_back());
        assert_eq!(sub.labels(), vec!["Item One", "Item Two", "Item Three"]);
    }

    #[test]
    fn value_demo_prints_choice() {
        let mut console = ScriptedConsole::new(["2"]);
        let mut out = Vec::new();
        run_demo(true, false, &mut console, &mut out, &fast()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "you chose: bar\n");
    }

    #[test]
    fn value_demo_quit_prints_nothing_chosen() {
        let mut console = ScriptedConsole::new(["q"]);
        let mut out = Vec::new();
        run_demo(true, false, &mut console, &mut out, &fast()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "you chose: nothing\n");
    }

    #[test]
    fn value_demo_json_event() {
        let mut console = ScriptedConsole::new(["x", "3"]);
        let mut out = Vec::new();
        run_demo(true, true, &mut console, &mut out, &fast()).unwrap();

        let event: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(event["outcome"], "leaf");
        assert_eq!(event["value"], "baz");
        assert_eq!(event["menu"], "values");
    }

    #[test]
    fn callback_demo_json_reports_quit_from_submenu() {
        let mut console = ScriptedConsole::new(["6", "q"]);
        let mut out = Vec::new();
        run_demo(false, true, &mut console, &mut out, &fast()).unwrap();

        let event: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(event["outcome"], "quit");
        assert!(event["value"].is_null());
    }
}
