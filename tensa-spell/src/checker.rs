//! Heuristic spelling and grammar checking
//!
//! Per-word repair first applies the skip rules (two letters or fewer,
//! proper nouns past the sentence start, vowel-free abbreviations), then a
//! fixed repair precedence (important for correctness):
//! 1. exact lookup in the closed misspelling dictionary
//! 2. repeated-letter collapse: a run of 3+ identical letters becomes
//!    exactly 2 (the literal rule, whether or not the output is a word)
//! 3. gerund-doubling repair against the closed doubled-gerund list
//!
//! Words matching no rule produce no suggestion. The English-only grammar
//! pass flags present-progressive constructions and a short list of
//! nonsensical phrase patterns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tensa_analyzer::{tokenize, Token};

use crate::dictionary::{DOUBLED_GERUNDS, MISSPELLINGS};
use crate::langid::{detect_language, Lang};

/// Problem categories reported by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Spelling,
    Grammar,
    Semantic,
}

/// One detected problem with optional repair suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellProblem {
    pub word: String,
    /// Byte offset of `word` in the checked text.
    pub index: usize,
    pub suggestions: Vec<String>,
    pub kind: ProblemKind,
}

/// Checker output: the detected language bucket plus all problems found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellReport {
    pub lang: Lang,
    pub problems: Vec<SpellProblem>,
}

/// Caller-tunable knobs. Defaults: detect the language, run the grammar
/// pass.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Skip detection and force a language bucket.
    pub lang: Option<Lang>,
    /// Disable the grammar/semantic passes (spelling still runs).
    pub skip_grammar: bool,
}

/// Present-progressive construction in a past-tense exercise:
/// pronoun + am/is/are + gerund.
static PROGRESSIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(i|you|he|she|it|we|they)\s+(am|is|are)\s+(\p{L}+ing)\b")
        .expect("progressive pattern compiles")
});

/// Nonsensical cross-category phrases. A placeholder sanity check with very
/// low precision, kept deliberately small.
static SEMANTIC_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bcat\b.*\breading\b.*\bcloud\b",
        r"(?i)\bfish\b.*\bclimb(?:ed|ing)\b",
        r"(?i)\btable\b.*\bsing(?:s|ing)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("semantic pattern compiles"))
    .collect()
});

/// Check `text` with default options.
pub fn check_text(text: &str) -> SpellReport {
    check_text_with(text, &CheckOptions::default())
}

/// Check `text`, controlling language and which passes run.
pub fn check_text_with(text: &str, opts: &CheckOptions) -> SpellReport {
    let lang = opts.lang.unwrap_or_else(|| detect_language(text));
    let tokens = tokenize(text);

    let mut problems = Vec::new();
    for (position, token) in tokens.iter().enumerate() {
        if let Some(suggestion) = repair_word(token, position) {
            problems.push(SpellProblem {
                word: token.text.clone(),
                index: token.start,
                suggestions: vec![suggestion],
                kind: ProblemKind::Spelling,
            });
        }
    }

    if lang == Lang::En && !opts.skip_grammar {
        grammar_pass(text, &mut problems);
        semantic_pass(text, &mut problems);
    }

    SpellReport { lang, problems }
}

/// Run the repair cascade for one word. `None` means no suggestion: either
/// the word matched no rule or one of the skip rules applied.
fn repair_word(token: &Token, position: usize) -> Option<String> {
    let word = token.normalized.as_str();
    if word.chars().count() <= 2 {
        return None;
    }
    // A capitalized word past the start of the sentence is assumed to be a
    // proper noun.
    if position > 0 && token.text.chars().next().is_some_and(|c| c.is_uppercase()) {
        return None;
    }
    // No vowel at all: assume an abbreviation ("pdf", "html"), suggest
    // nothing.
    if !word.chars().any(is_vowel) {
        return None;
    }

    if let Some(correction) = MISSPELLINGS.get(word) {
        return Some((*correction).to_string());
    }

    let collapsed = collapse_letter_runs(word);
    if collapsed != word {
        return Some(collapsed);
    }

    if let Some(doubled) = doubled_gerund_repair(word) {
        return Some(doubled);
    }

    None
}

/// Vowels for the two supported language buckets, accented forms included.
fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ü'
    )
}

/// Collapse every run of 3+ identical letters to exactly 2. The rule is
/// literally "3+ same letters -> 2 same letters", not "correct spelling":
/// `helllo` becomes `hello` only because the collapse happens to land on it.
fn collapse_letter_runs(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut run_char = None;
    let mut run_len = 0usize;

    for c in word.chars() {
        if Some(c) == run_char {
            run_len += 1;
        } else {
            run_char = Some(c);
            run_len = 1;
        }
        // Only letter runs collapse; repeated digits or marks pass through.
        if run_len <= 2 || !c.is_alphabetic() {
            out.push(c);
        }
    }

    out
}

/// Suggest the doubled-consonant gerund when the doubled form is in the
/// fixed list and the word itself is not: `runing -> running`.
fn doubled_gerund_repair(word: &str) -> Option<String> {
    let stem = word.strip_suffix("ing")?;
    let last = stem.chars().last()?;
    if !last.is_alphabetic() {
        return None;
    }

    let doubled = format!("{stem}{last}ing");
    if DOUBLED_GERUNDS.contains(&doubled.as_str()) && !DOUBLED_GERUNDS.contains(&word) {
        return Some(doubled);
    }
    None
}

fn grammar_pass(text: &str, problems: &mut Vec<SpellProblem>) {
    for captures in PROGRESSIVE.captures_iter(text) {
        let pronoun = captures
            .get(1)
            .map(|m| m.as_str().to_lowercase())
            .unwrap_or_default();
        let auxiliary = match captures.get(2) {
            Some(m) => m,
            None => continue,
        };
        let suggestion = match pronoun.as_str() {
            "i" | "he" | "she" | "it" => "was",
            _ => "were",
        };
        problems.push(SpellProblem {
            word: auxiliary.as_str().to_string(),
            index: auxiliary.start(),
            suggestions: vec![suggestion.to_string()],
            kind: ProblemKind::Grammar,
        });
    }
}

fn semantic_pass(text: &str, problems: &mut Vec<SpellProblem>) {
    for pattern in SEMANTIC_PATTERNS.iter() {
        if let Some(found) = pattern.find(text) {
            problems.push(SpellProblem {
                word: found.as_str().to_string(),
                index: found.start(),
                suggestions: Vec::new(),
                kind: ProblemKind::Semantic,
            });
        }
    }
}
