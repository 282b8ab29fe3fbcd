//! Grammatical role classification
//!
//! Core classification logic assigning at most one role per recognized word.
//! Rules run in a fixed precedence order (important for correctness):
//! 1. Subject (closed pronoun set)
//! 2. Auxiliary (past `was/were`, else present `am/is/are` flagged as error)
//! 3. Gerund (`-ing` form, length > 4)
//! 4. Main past verb (irregular list or `-ed` suffix; skipped when an
//!    auxiliary already fixed the tense)
//! 5. Connector (`while/when/as`)
//! 6. Complement (length heuristic, no specific token)
//!
//! Within each rule the first matching token wins, left to right, and a
//! token claimed by one rule is invisible to the rules after it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::detect::ErrorKind;
use crate::token::Token;

/// The function a word plays in the target sentence structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GrammaticalRole {
    Subject,
    Auxiliary,
    Verb,
    Gerund,
    MainVerbPast,
    Connector,
    Complement,
}

impl GrammaticalRole {
    /// Every role, in classification order. Used by callers that need to
    /// build activity maps over the full role set.
    pub const ALL: [GrammaticalRole; 7] = [
        GrammaticalRole::Subject,
        GrammaticalRole::Auxiliary,
        GrammaticalRole::Verb,
        GrammaticalRole::Gerund,
        GrammaticalRole::MainVerbPast,
        GrammaticalRole::Connector,
        GrammaticalRole::Complement,
    ];
}

/// Which tense a single role points toward, before the full inference runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenseHint {
    PastContinuous,
    PastSimple,
}

/// Whether a main past verb was formed regularly (`-ed`) or matched the
/// irregular list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PastForm {
    Regular,
    Irregular,
}

/// One classified role occurrence, owned by the analysis that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePart {
    pub role: GrammaticalRole,
    pub text: String,
    pub is_valid: bool,
    /// Byte offset of the claimed word; zero for the complement heuristic.
    pub start: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tense_hint: Option<TenseHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_form: Option<PastForm>,
    /// Display hint for gerunds: the token minus its `ing` suffix. Not
    /// spell-corrected (no consonant undoubling or `e` restoration).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_verb: Option<String>,
}

impl RolePart {
    fn from_token(role: GrammaticalRole, token: &Token) -> Self {
        RolePart {
            role,
            text: token.text.clone(),
            is_valid: true,
            start: token.start,
            tense_hint: None,
            error: None,
            suggestion: None,
            past_form: None,
            base_verb: None,
        }
    }
}

const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];
const PAST_AUXILIARIES: &[&str] = &["was", "were"];
const PRESENT_AUXILIARIES: &[&str] = &["am", "is", "are"];
const CONNECTORS: &[&str] = &["while", "when", "as"];

/// Fixed past-tense verb list for the supported exercises. Irregular forms
/// plus a handful of high-frequency regular ones the tutor drills on.
const PAST_VERBS: &[&str] = &[
    "went", "came", "saw", "did", "had", "got", "took", "made", "said", "ate", "ran", "wrote",
    "read", "spoke", "told", "thought", "bought", "brought", "found", "gave", "knew", "left",
    "met", "put", "sat", "sang", "slept", "stood", "swam", "wore", "won", "drank", "drove",
    "fell", "felt", "flew", "walked", "worked", "played", "studied",
];

/// Number of tokens above which a sentence is considered to carry a
/// complement.
const COMPLEMENT_THRESHOLD: usize = 3;

/// Assign grammatical roles to a token list.
///
/// Pure function: no side effects, same output for the same tokens. At most
/// one `RolePart` is recorded per role, and at most one role per token.
pub fn classify(tokens: &[Token]) -> BTreeMap<GrammaticalRole, RolePart> {
    let mut parts = BTreeMap::new();
    let mut claimed = vec![false; tokens.len()];

    claim_subject(tokens, &mut claimed, &mut parts);
    claim_auxiliary(tokens, &mut claimed, &mut parts);
    claim_gerund(tokens, &mut claimed, &mut parts);
    claim_main_verb_past(tokens, &mut claimed, &mut parts);
    claim_connector(tokens, &mut claimed, &mut parts);

    if tokens.len() > COMPLEMENT_THRESHOLD {
        parts.insert(
            GrammaticalRole::Complement,
            RolePart {
                role: GrammaticalRole::Complement,
                text: String::new(),
                is_valid: true,
                start: 0,
                tense_hint: None,
                error: None,
                suggestion: None,
                past_form: None,
                base_verb: None,
            },
        );
    }

    parts
}

/// First unclaimed token satisfying `matches`, marking it claimed.
fn take_first<'a>(
    tokens: &'a [Token],
    claimed: &mut [bool],
    matches: impl Fn(&Token) -> bool,
) -> Option<&'a Token> {
    for (idx, token) in tokens.iter().enumerate() {
        if !claimed[idx] && matches(token) {
            claimed[idx] = true;
            return Some(token);
        }
    }
    None
}

fn claim_subject(
    tokens: &[Token],
    claimed: &mut [bool],
    parts: &mut BTreeMap<GrammaticalRole, RolePart>,
) {
    if let Some(token) = take_first(tokens, claimed, |t| {
        SUBJECT_PRONOUNS.contains(&t.normalized.as_str())
    }) {
        parts.insert(
            GrammaticalRole::Subject,
            RolePart::from_token(GrammaticalRole::Subject, token),
        );
    }
}

fn claim_auxiliary(
    tokens: &[Token],
    claimed: &mut [bool],
    parts: &mut BTreeMap<GrammaticalRole, RolePart>,
) {
    // Past auxiliaries take precedence over present ones anywhere in the
    // sentence.
    if let Some(token) = take_first(tokens, claimed, |t| {
        PAST_AUXILIARIES.contains(&t.normalized.as_str())
    }) {
        let mut part = RolePart::from_token(GrammaticalRole::Auxiliary, token);
        part.tense_hint = Some(TenseHint::PastContinuous);
        parts.insert(GrammaticalRole::Auxiliary, part);
        return;
    }

    if let Some(token) = take_first(tokens, claimed, |t| {
        PRESENT_AUXILIARIES.contains(&t.normalized.as_str())
    }) {
        let suggestion = if token.normalized == "are" { "were" } else { "was" };
        let mut part = RolePart::from_token(GrammaticalRole::Auxiliary, token);
        part.is_valid = false;
        part.error = Some(ErrorKind::PresentInPast);
        part.suggestion = Some(suggestion.to_string());
        parts.insert(GrammaticalRole::Auxiliary, part);
    }
}

fn claim_gerund(
    tokens: &[Token],
    claimed: &mut [bool],
    parts: &mut BTreeMap<GrammaticalRole, RolePart>,
) {
    if let Some(token) = take_first(tokens, claimed, |t| is_gerund(&t.normalized)) {
        let mut part = RolePart::from_token(GrammaticalRole::Gerund, token);
        part.tense_hint = Some(TenseHint::PastContinuous);
        part.base_verb = token
            .normalized
            .strip_suffix("ing")
            .map(|base| base.to_string());
        parts.insert(GrammaticalRole::Gerund, part);
    }
}

fn claim_main_verb_past(
    tokens: &[Token],
    claimed: &mut [bool],
    parts: &mut BTreeMap<GrammaticalRole, RolePart>,
) {
    // Only meaningful when no auxiliary has already fixed the tense.
    if parts.contains_key(&GrammaticalRole::Auxiliary) {
        return;
    }

    if let Some(token) = take_first(tokens, claimed, |t| is_past_verb(&t.normalized)) {
        let mut part = RolePart::from_token(GrammaticalRole::MainVerbPast, token);
        part.tense_hint = Some(TenseHint::PastSimple);
        part.past_form = Some(if token.normalized.ends_with("ed") {
            PastForm::Regular
        } else {
            PastForm::Irregular
        });
        parts.insert(GrammaticalRole::MainVerbPast, part);
    }
}

fn claim_connector(
    tokens: &[Token],
    claimed: &mut [bool],
    parts: &mut BTreeMap<GrammaticalRole, RolePart>,
) {
    if let Some(token) = take_first(tokens, claimed, |t| {
        CONNECTORS.contains(&t.normalized.as_str())
    }) {
        parts.insert(
            GrammaticalRole::Connector,
            RolePart::from_token(GrammaticalRole::Connector, token),
        );
    }
}

fn is_gerund(word: &str) -> bool {
    word.ends_with("ing") && word.chars().count() > 4
}

fn is_past_verb(word: &str) -> bool {
    PAST_VERBS.contains(&word) || (word.ends_with("ed") && word.chars().count() > 2)
}
