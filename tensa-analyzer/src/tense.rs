//! Tense inference
//!
//! Reads the classified role set and produces a single tense verdict, plus
//! the table of roles each tense requires. Evaluation order matters:
//! 1. valid past auxiliary fixes past continuous
//! 2. an invalid (present) auxiliary is a tense contradiction
//! 3. a main past verb without auxiliary means past simple
//! 4. anything else is unknown

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roles::{GrammaticalRole, RolePart};

/// The verb tense a sentence is attempting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenseType {
    PastContinuous,
    PastSimple,
    PresentError,
    Unknown,
}

impl Default for TenseType {
    fn default() -> Self {
        TenseType::Unknown
    }
}

/// Infer the tense from a classified role set. First rule wins.
pub fn infer_tense(parts: &BTreeMap<GrammaticalRole, RolePart>) -> TenseType {
    match parts.get(&GrammaticalRole::Auxiliary) {
        Some(aux) if aux.is_valid => TenseType::PastContinuous,
        Some(_) => TenseType::PresentError,
        None if parts.contains_key(&GrammaticalRole::MainVerbPast) => TenseType::PastSimple,
        None => TenseType::Unknown,
    }
}

/// Roles a sentence must carry to count as complete for the given tense.
///
/// `Unknown` and `PresentError` fall back to the past-simple requirement so
/// the learner always has a minimal actionable target.
pub fn required_roles(tense: TenseType) -> &'static [GrammaticalRole] {
    match tense {
        TenseType::PastContinuous => &[
            GrammaticalRole::Subject,
            GrammaticalRole::Auxiliary,
            GrammaticalRole::Gerund,
        ],
        TenseType::PastSimple | TenseType::PresentError | TenseType::Unknown => {
            &[GrammaticalRole::Subject, GrammaticalRole::MainVerbPast]
        }
    }
}
