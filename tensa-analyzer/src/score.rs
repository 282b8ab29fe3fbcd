//! Completion scoring
//!
//! Measures how much of the tense-required role set a sentence satisfies.
//! Roles irrelevant to the inferred tense are neither completed nor missing,
//! which keeps the progress bar honest when a learner switches structures
//! mid-sentence.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::roles::{GrammaticalRole, RolePart};
use crate::tense::{required_roles, TenseType};

/// Scoring output: which required roles are satisfied, which remain, and the
/// resulting percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub completed_roles: BTreeSet<GrammaticalRole>,
    pub missing_roles: BTreeSet<GrammaticalRole>,
    pub completion_percentage: u8,
}

/// Score the classified roles against the requirement table for `tense`.
///
/// The percentage is `round(100 * satisfied / required)` clamped to
/// `[0, 100]`; every tense has a non-empty requirement so there is no
/// division by zero.
pub fn score(parts: &BTreeMap<GrammaticalRole, RolePart>, tense: TenseType) -> Completion {
    let required = required_roles(tense);

    let completed_roles: BTreeSet<GrammaticalRole> = required
        .iter()
        .filter(|role| parts.get(role).is_some_and(|part| part.is_valid))
        .copied()
        .collect();

    let missing_roles: BTreeSet<GrammaticalRole> = required
        .iter()
        .filter(|role| !completed_roles.contains(role))
        .copied()
        .collect();

    let ratio = completed_roles.len() as f64 / required.len() as f64;
    let completion_percentage = (ratio * 100.0).round().clamp(0.0, 100.0) as u8;

    Completion {
        completed_roles,
        missing_roles,
        completion_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::classify;
    use crate::tense::infer_tense;
    use crate::token::tokenize;

    fn score_text(text: &str) -> Completion {
        let parts = classify(&tokenize(text));
        let tense = infer_tense(&parts);
        score(&parts, tense)
    }

    #[test]
    fn complete_past_continuous_scores_full() {
        let completion = score_text("I was studying when you called");
        assert_eq!(completion.completion_percentage, 100);
        assert!(completion.missing_roles.is_empty());
    }

    #[test]
    fn partial_past_continuous_reports_missing_gerund() {
        let completion = score_text("I was");
        assert!(completion.missing_roles.contains(&GrammaticalRole::Gerund));
        assert_eq!(completion.completion_percentage, 67);
    }

    #[test]
    fn completed_and_missing_are_disjoint() {
        for text in ["I was", "I studied", "hello there", "I am studying now"] {
            let completion = score_text(text);
            assert!(completion
                .completed_roles
                .intersection(&completion.missing_roles)
                .next()
                .is_none());
        }
    }

    #[test]
    fn irrelevant_roles_do_not_count() {
        // Connector is present but past simple only requires subject + verb.
        let completion = score_text("I studied when");
        assert_eq!(completion.completion_percentage, 100);
        assert!(!completion
            .completed_roles
            .contains(&GrammaticalRole::Connector));
    }

    #[test]
    fn invalid_auxiliary_is_not_completed() {
        let completion = score_text("I am studying now");
        assert!(!completion
            .completed_roles
            .contains(&GrammaticalRole::Auxiliary));
        assert_eq!(completion.completion_percentage, 50);
    }
}
