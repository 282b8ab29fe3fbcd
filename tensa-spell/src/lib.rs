//! # tensa-spell
//!
//! Heuristic spelling and grammar checking, independent of the role/tense
//! analyzer. The checker runs a fixed-rule repair cascade per word plus an
//! English-only grammar pass; it is deliberately not a dictionary-backed
//! checker, so words matching no rule simply produce no suggestion.

pub mod checker;
pub mod dictionary;
pub mod langid;

pub use checker::{check_text, check_text_with, CheckOptions, ProblemKind, SpellProblem, SpellReport};
pub use langid::{detect_language, Lang};
