//! Property-based tests for the analyzer
//!
//! The analyzer must be total over arbitrary input (no panics), idempotent
//! (no hidden state between calls), and keep its set invariants.

use proptest::prelude::*;
use tensa_analyzer::{analyze, quick_classify, required_roles, tokenize};

proptest! {
    #[test]
    fn analyze_never_panics(text in "\\PC{0,200}") {
        let _ = analyze(&text);
    }

    #[test]
    fn analyze_is_idempotent(text in "\\PC{0,200}") {
        prop_assert_eq!(analyze(&text), analyze(&text));
    }

    #[test]
    fn completed_and_missing_are_disjoint(text in "[a-zA-Z ]{0,80}") {
        let result = analyze(&text);
        prop_assert!(result
            .completed_roles
            .intersection(&result.missing_roles)
            .next()
            .is_none());
    }

    #[test]
    fn missing_roles_come_from_the_required_set(text in "[a-zA-Z ]{0,80}") {
        let result = analyze(&text);
        let required = required_roles(result.tense_type);
        for role in &result.missing_roles {
            prop_assert!(required.contains(role));
        }
    }

    #[test]
    fn completion_is_a_percentage(text in "\\PC{0,200}") {
        prop_assert!(analyze(&text).completion_percentage <= 100);
    }

    #[test]
    fn quick_and_full_paths_agree_on_tense(text in "[a-zA-Z ]{0,80}") {
        // quick_classify classifies even sub-threshold input, so compare
        // only when the full path actually ran.
        if !tokenize(&text).is_empty() {
            prop_assert_eq!(quick_classify(&text).tense_type, analyze(&text).tense_type);
        }
    }

    #[test]
    fn token_offsets_index_into_the_source(text in "\\PC{0,200}") {
        for token in tokenize(&text) {
            prop_assert!(text[token.start..].starts_with(&token.text));
        }
    }
}
