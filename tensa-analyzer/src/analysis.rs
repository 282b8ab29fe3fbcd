//! Analysis entry points
//!
//! Composes the staged pipeline (tokenize -> classify -> infer -> detect ->
//! score) into the two operations collaborators consume: the full
//! [`analyze`] pass and the cheap [`quick_classify`] subset used by the
//! client's low-latency path.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::detect::{detect_errors, ErrorRecord};
use crate::roles::{classify, GrammaticalRole, RolePart};
use crate::score::score;
use crate::tense::{infer_tense, TenseType};
use crate::token::tokenize;

/// Complete classification of one sentence. Created fresh on every call and
/// never mutated; callers replace their copy wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub original_text: String,
    pub parts: BTreeMap<GrammaticalRole, RolePart>,
    pub tense_type: TenseType,
    pub is_valid: bool,
    pub errors: Vec<ErrorRecord>,
    pub completed_roles: BTreeSet<GrammaticalRole>,
    pub missing_roles: BTreeSet<GrammaticalRole>,
    pub completion_percentage: u8,
}

impl AnalysisResult {
    /// Result for input with no meaningful tokens: nothing classified,
    /// nothing required, nothing scored.
    pub fn empty(text: &str) -> Self {
        AnalysisResult {
            original_text: text.to_string(),
            parts: BTreeMap::new(),
            tense_type: TenseType::Unknown,
            is_valid: false,
            errors: Vec::new(),
            completed_roles: BTreeSet::new(),
            missing_roles: BTreeSet::new(),
            completion_percentage: 0,
        }
    }
}

/// The low-latency subset: tense plus a presence flag per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickClassification {
    pub tense_type: TenseType,
    pub role_activity: BTreeMap<GrammaticalRole, bool>,
}

/// Run the full analysis over one sentence.
///
/// Deterministic and pure: identical input produces identical output
/// whether this runs behind the service boundary or as the local fallback.
pub fn analyze(text: &str) -> AnalysisResult {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return AnalysisResult::empty(text);
    }

    let parts = classify(&tokens);
    let tense_type = infer_tense(&parts);
    let errors = detect_errors(&parts, tense_type);
    let completion = score(&parts, tense_type);
    let is_valid = errors.is_empty() && completion.missing_roles.is_empty();

    AnalysisResult {
        original_text: text.to_string(),
        parts,
        tense_type,
        is_valid,
        errors,
        completed_roles: completion.completed_roles,
        missing_roles: completion.missing_roles,
        completion_percentage: completion.completion_percentage,
    }
}

/// Classification limited to role/tense state, for icon feedback on small
/// edits. Skips error detection and scoring entirely.
pub fn quick_classify(text: &str) -> QuickClassification {
    let tokens = tokenize(text);
    let parts = classify(&tokens);
    let tense_type = infer_tense(&parts);

    let role_activity = GrammaticalRole::ALL
        .iter()
        .map(|role| (*role, parts.contains_key(role)))
        .collect();

    QuickClassification {
        tense_type,
        role_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_is_idempotent() {
        let first = analyze("I was studying when you called");
        let second = analyze("I was studying when you called");
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_produces_empty_result() {
        let result = analyze("   ");
        assert!(result.parts.is_empty());
        assert_eq!(result.tense_type, TenseType::Unknown);
        assert!(!result.is_valid);
        assert!(result.missing_roles.is_empty());
        assert_eq!(result.completion_percentage, 0);
    }

    #[test]
    fn quick_classify_reports_activity_for_every_role() {
        let quick = quick_classify("I was studying");
        assert_eq!(quick.role_activity.len(), GrammaticalRole::ALL.len());
        assert_eq!(quick.tense_type, TenseType::PastContinuous);
        assert!(quick.role_activity[&GrammaticalRole::Subject]);
        assert!(!quick.role_activity[&GrammaticalRole::Connector]);
    }

    #[test]
    fn results_round_trip_through_json() {
        let result = analyze("I am studying now");
        let json = serde_json::to_string(&result).expect("result serializes");
        let back: AnalysisResult = serde_json::from_str(&json).expect("result deserializes");
        assert_eq!(result, back);
    }
}
