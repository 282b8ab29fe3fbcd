//! # tensa
//!
//! Facade over the tensa workspace: grammatical structure and tense
//! analysis for a browser-based English-tense tutor, plus the heuristic
//! spell/grammar checker and the reactive pipeline that schedules them.
//!
//! Most callers only need [`analyze`], [`quick_classify`] and
//! [`check_text`]; clients embedding the reactive behavior build an
//! [`Orchestrator`](pipeline::Orchestrator) from the pipeline module.

pub use tensa_analyzer as analyzer;
pub use tensa_config as config;
pub use tensa_pipeline as pipeline;
pub use tensa_spell as spell;

pub use tensa_analyzer::{analyze, quick_classify, AnalysisResult, QuickClassification};
pub use tensa_spell::{check_text, SpellReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facade_reexports_the_core_operations() {
        let result = analyze("I was studying");
        assert!(result.is_valid);

        let report = check_text("I recieve teh book");
        assert_eq!(report.problems.len(), 2);
    }
}
