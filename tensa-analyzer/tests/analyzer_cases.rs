//! End-to-end analyzer cases covering the contract the tutor UI relies on.

use rstest::rstest;
use tensa_analyzer::{analyze, ErrorKind, GrammaticalRole, TenseType};

#[test]
fn full_past_continuous_sentence_is_valid_and_complete() {
    let result = analyze("I was studying when you called");

    assert_eq!(result.tense_type, TenseType::PastContinuous);
    assert_eq!(result.parts[&GrammaticalRole::Subject].text, "I");
    assert_eq!(result.parts[&GrammaticalRole::Auxiliary].text, "was");
    assert_eq!(result.parts[&GrammaticalRole::Gerund].text, "studying");
    assert_eq!(result.parts[&GrammaticalRole::Connector].text, "when");
    assert!(result.is_valid);
    assert!(result.errors.is_empty());
    assert_eq!(result.completion_percentage, 100);
}

#[test]
fn past_simple_sentence_is_valid() {
    let result = analyze("I studied English yesterday");

    assert_eq!(result.tense_type, TenseType::PastSimple);
    assert!(result.parts.contains_key(&GrammaticalRole::Subject));
    assert_eq!(result.parts[&GrammaticalRole::MainVerbPast].text, "studied");
    assert!(result.is_valid);
}

#[test]
fn present_tense_in_past_exercise_is_an_error() {
    let result = analyze("I am studying now");

    assert_eq!(result.tense_type, TenseType::PresentError);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::PresentInPast);
    assert_eq!(result.errors[0].detected, "am");
    assert_eq!(result.errors[0].suggestion, "was");
    assert!(!result.is_valid);
}

#[test]
fn truncated_past_continuous_reports_missing_gerund() {
    let result = analyze("I was");

    assert_eq!(result.tense_type, TenseType::PastContinuous);
    assert!(result.missing_roles.contains(&GrammaticalRole::Gerund));
    assert!(!result.is_valid);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::MissingGerund);
}

#[rstest]
#[case("I was studying", TenseType::PastContinuous)]
#[case("They were playing football", TenseType::PastContinuous)]
#[case("She walked home", TenseType::PastSimple)]
#[case("we went to school", TenseType::PastSimple)]
#[case("he is running late", TenseType::PresentError)]
#[case("you are reading", TenseType::PresentError)]
#[case("the blue house", TenseType::Unknown)]
#[case("studying", TenseType::Unknown)]
fn tense_verdicts(#[case] text: &str, #[case] expected: TenseType) {
    assert_eq!(analyze(text).tense_type, expected);
}

#[rstest]
#[case("I", "I was")]
#[case("I was", "I was studying")]
#[case("I", "I studied")]
#[case("They", "They walked")]
fn adding_a_required_role_never_lowers_completion(#[case] before: &str, #[case] after: &str) {
    let before = analyze(before).completion_percentage;
    let after = analyze(after).completion_percentage;
    assert!(
        after >= before,
        "completion dropped from {before} to {after}"
    );
}

#[test]
fn completed_and_missing_roles_never_overlap() {
    for text in [
        "I was studying when you called",
        "I was",
        "I am studying now",
        "hello world",
        "",
    ] {
        let result = analyze(text);
        assert!(result
            .completed_roles
            .intersection(&result.missing_roles)
            .next()
            .is_none());
    }
}
