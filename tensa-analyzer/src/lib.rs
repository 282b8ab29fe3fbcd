//! # tensa-analyzer
//!
//! Grammatical structure and tense analysis for learner sentences.
//!
//! The crate is a family of pure, deterministic functions: raw text is
//! tokenized, each recognized word is assigned at most one grammatical role,
//! the role set determines the tense the sentence is attempting, and an
//! error/scoring layer cross-checks the roles against that tense. The result
//! of one full pass is an immutable [`AnalysisResult`]; callers replace it
//! wholesale on every new analysis, never mutate it.
//!
//! Nothing in this crate performs I/O, touches storage, or keeps state
//! between calls.

pub mod analysis;
pub mod detect;
pub mod roles;
pub mod score;
pub mod tense;
pub mod token;

pub use analysis::{analyze, quick_classify, AnalysisResult, QuickClassification};
pub use detect::{detect_errors, ErrorKind, ErrorRecord};
pub use roles::{classify, GrammaticalRole, PastForm, RolePart, TenseHint};
pub use score::{score, Completion};
pub use tense::{infer_tense, required_roles, TenseType};
pub use token::{tokenize, Token};
