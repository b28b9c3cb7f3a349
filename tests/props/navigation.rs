//! Property tests for the navigation loop.

use std::time::Duration;

use proptest::prelude::*;

use console_menu::{Action, MenuNode, Outcome, ScriptedConsole, Settings};

fn tree() -> MenuNode<u32> {
    let child = MenuNode::with_entries(
        "Child",
        None,
        vec![(Action::leaf(10), "Ten"), (Action::leaf(20), "Twenty")],
    )
    .unwrap();
    let root = MenuNode::with_entries(
        "Root",
        None,
        vec![(Action::leaf(1), "One"), (Action::leaf(2), "Two")],
    )
    .unwrap();
    root.add_entry(Action::submenu(&child), "Child").unwrap();
    root
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any input script ends in a leaf of the tree or quit, never an error.
    #[test]
    fn property_run_always_terminates_cleanly(
        script in proptest::collection::vec(
            prop_oneof![
                Just("1".to_string()),
                Just("2".to_string()),
                Just("3".to_string()),
                Just("b".to_string()),
                Just("q".to_string()),
                "[a-z0-9 ]{0,3}",
            ],
            0..30,
        )
    ) {
        let settings = Settings::default().with_error_delay(Duration::ZERO);
        let mut console = ScriptedConsole::new(script);

        let outcome = tree().run_with(&mut console, &settings).unwrap();

        match outcome {
            Outcome::Leaf(v) => prop_assert!([1, 2, 10, 20].contains(&v)),
            Outcome::Quit => {}
        }
    }
}
