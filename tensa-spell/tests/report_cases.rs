//! Checker report contract tests.

use rstest::rstest;
use tensa_spell::{check_text, detect_language, Lang, ProblemKind};

#[test]
fn report_includes_both_dictionary_misspellings() {
    let report = check_text("I recieve teh book");
    assert_eq!(report.lang, Lang::En);

    let words: Vec<_> = report
        .problems
        .iter()
        .map(|p| (p.word.as_str(), p.suggestions.clone()))
        .collect();
    assert!(words.contains(&("recieve", vec!["receive".to_string()])));
    assert!(words.contains(&("teh", vec!["the".to_string()])));
}

#[test]
fn problem_indices_point_into_the_text() {
    let text = "she goed home and eated lunch";
    for problem in check_text(text).problems {
        assert!(text[problem.index..].starts_with(&problem.word));
    }
}

#[rstest]
#[case("I was reading the book", Lang::En)]
#[case("ella estaba leyendo el libro", Lang::Es)]
#[case("", Lang::En)]
fn language_buckets(#[case] text: &str, #[case] expected: Lang) {
    assert_eq!(detect_language(text), expected);
}

#[test]
fn report_serializes_with_contract_field_names() {
    let report = check_text("I am studying now");
    let json = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(json["lang"], "en");
    let problems = json["problems"].as_array().expect("problems array");
    assert!(!problems.is_empty());
    for problem in problems {
        assert!(problem.get("word").is_some());
        assert!(problem.get("index").is_some());
        assert!(problem.get("suggestions").is_some());
        assert!(problem.get("kind").is_some());
    }
}

#[test]
fn checker_and_analyzer_reports_stay_separate() {
    // The spell report is a sibling of the analysis result, never merged.
    let report = check_text("I am studying now");
    assert!(report
        .problems
        .iter()
        .any(|p| p.kind == ProblemKind::Grammar));
}
