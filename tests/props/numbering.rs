//! Property tests for entry numbering.

use proptest::prelude::*;

use console_menu::{Action, MenuNode, Selector};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: selectors are exactly 1..=N in call order, whatever the labels.
    #[test]
    fn property_selectors_are_dense(labels in proptest::collection::vec("[a-zA-Z ]{0,12}", 0..20)) {
        let menu = MenuNode::new("Props");
        let mut assigned = Vec::new();

        for (i, label) in labels.iter().enumerate() {
            match menu.add_entry(Action::leaf(i), label.as_str()) {
                Ok(n) => assigned.push(n),
                Err(_) => prop_assert!(label.trim().is_empty(), "rejected non-empty label {:?}", label),
            }
        }

        let expected: Vec<usize> = (1..=assigned.len()).collect();
        prop_assert_eq!(&assigned, &expected);
        prop_assert_eq!(menu.len(), assigned.len());

        let items: Vec<usize> = menu
            .selectors()
            .into_iter()
            .filter_map(|(s, _)| match s {
                Selector::Item(n) => Some(n),
                Selector::Builtin(_) => None,
            })
            .collect();
        prop_assert_eq!(items, expected);
    }
}
