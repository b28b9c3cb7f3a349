//! Property tests for selector parsing.

use proptest::prelude::*;

use console_menu::{Builtin, Selector};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing never panics and only yields canonical spellings.
    #[test]
    fn property_parse_is_canonical(input in "\\PC{0,8}") {
        if let Some(selector) = Selector::parse(&input) {
            prop_assert_eq!(selector.to_string(), input);
        }
    }

    /// PROPERTY: every positive number parses back to itself.
    #[test]
    fn property_numbers_parse(n in 1usize..100_000) {
        prop_assert_eq!(Selector::parse(&n.to_string()), Some(Selector::Item(n)));
    }

    /// PROPERTY: item and builtin spaces never collide.
    #[test]
    fn property_builtins_never_numeric(n in 1usize..1000) {
        for builtin in Builtin::ALL {
            prop_assert_ne!(Selector::Builtin(builtin).to_string(), n.to_string());
        }
    }
}
