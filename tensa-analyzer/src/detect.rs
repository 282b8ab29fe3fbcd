//! Error detection
//!
//! Cross-checks the classified roles against the inferred tense and emits
//! learner-facing error records. Two contradictions are modeled today:
//! a present-tense auxiliary inside a past-tense exercise, and a past
//! continuous sentence missing its gerund. The table is the natural growth
//! point for further checks (subject-verb agreement, etc.).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roles::{GrammaticalRole, RolePart};
use crate::tense::TenseType;

/// Kinds of learner errors surfaced by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    PresentInPast,
    MissingGerund,
}

/// One detected error with the offending word and a repair suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    /// The word that triggered the error; empty for completeness errors
    /// that have no specific token (missing gerund).
    pub detected: String,
    pub suggestion: String,
    pub at_index: usize,
}

/// Detect contradictions between the role set and the inferred tense.
pub fn detect_errors(
    parts: &BTreeMap<GrammaticalRole, RolePart>,
    tense: TenseType,
) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();

    if let Some(aux) = parts.get(&GrammaticalRole::Auxiliary) {
        if aux.error == Some(ErrorKind::PresentInPast) {
            errors.push(ErrorRecord {
                kind: ErrorKind::PresentInPast,
                detected: aux.text.clone(),
                suggestion: aux.suggestion.clone().unwrap_or_default(),
                at_index: aux.start,
            });
        }
    }

    // A completeness error rather than a correctness one, but surfaced the
    // same way so the learner gets guidance.
    if tense == TenseType::PastContinuous && !parts.contains_key(&GrammaticalRole::Gerund) {
        errors.push(ErrorRecord {
            kind: ErrorKind::MissingGerund,
            detected: String::new(),
            suggestion: String::new(),
            at_index: 0,
        });
    }

    errors
}
