//! Command-line interface for tensa
//! Runs the tense analyzer and the spell checker over sentences, and hosts a
//! small interactive mode that drives the reactive pipeline from stdin.
//!
//! Usage:
//!   tensa analyze "I was studying" [--format <format>]  - Full analysis of one sentence
//!   tensa check "I recieve teh book" [--format <format>] - Spell/grammar check
//!   tensa watch                                          - Reactive analysis over stdin lines

use clap::{Arg, Command};
use tensa_pipeline::{LocalTransport, Orchestrator, PipelineUpdate};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let matches = Command::new("tensa")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Grammatical structure and tense analysis for learner sentences")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("analyze")
                .about("Run the full analyzer over one sentence")
                .arg(
                    Arg::new("text")
                        .help("The sentence to analyze")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('summary' or 'json')")
                        .default_value("summary"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Run the heuristic spell/grammar checker")
                .arg(
                    Arg::new("text")
                        .help("The text to check")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('summary' or 'json')")
                        .default_value("summary"),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Read lines from stdin and analyze them reactively"),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("analyze", analyze_matches)) => {
            let text = analyze_matches.get_one::<String>("text").expect("required");
            let format = analyze_matches
                .get_one::<String>("format")
                .expect("has default");
            handle_analyze_command(text, format);
        }
        Some(("check", check_matches)) => {
            let text = check_matches.get_one::<String>("text").expect("required");
            let format = check_matches
                .get_one::<String>("format")
                .expect("has default");
            handle_check_command(text, format);
        }
        Some(("watch", _)) => handle_watch_command(),
        _ => unreachable!("subcommand is required"),
    }
}

fn handle_analyze_command(text: &str, format: &str) {
    let result = tensa::analyze(text);

    if format == "json" {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Error serializing result: {err}"),
        }
        return;
    }

    println!("tense: {:?}", result.tense_type);
    println!("valid: {}", result.is_valid);
    println!("completion: {}%", result.completion_percentage);
    for (role, part) in &result.parts {
        if part.text.is_empty() {
            println!("  {role:?}");
        } else {
            println!("  {role:?}: {:?}", part.text);
        }
    }
    for error in &result.errors {
        if error.suggestion.is_empty() {
            println!("error: {:?}", error.kind);
        } else {
            println!(
                "error: {:?} ({:?} -> {:?})",
                error.kind, error.detected, error.suggestion
            );
        }
    }
    if !result.missing_roles.is_empty() {
        println!("missing: {:?}", result.missing_roles);
    }
}

fn handle_check_command(text: &str, format: &str) {
    let checker = match tensa_config::load_defaults() {
        Ok(config) => config.checker,
        Err(err) => {
            eprintln!("Error loading configuration: {err}");
            std::process::exit(1);
        }
    };
    let options = tensa::spell::CheckOptions {
        lang: tensa::spell::Lang::from_code(&checker.locale),
        skip_grammar: !checker.grammar_pass,
    };
    let report = tensa::spell::check_text_with(text, &options);

    if format == "json" {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => eprintln!("Error serializing report: {err}"),
        }
        return;
    }

    println!("language: {:?}", report.lang);
    if report.problems.is_empty() {
        println!("no problems found");
        return;
    }
    for problem in &report.problems {
        if problem.suggestions.is_empty() {
            println!("  [{:?}] {:?}", problem.kind, problem.word);
        } else {
            println!(
                "  [{:?}] {:?} -> {}",
                problem.kind,
                problem.word,
                problem.suggestions.join(", ")
            );
        }
    }
}

fn handle_watch_command() {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error starting runtime: {err}");
            std::process::exit(1);
        }
    };

    runtime.block_on(async {
        let settings = match tensa_config::load_defaults() {
            Ok(config) => config.pipeline,
            Err(err) => {
                eprintln!("Error loading configuration: {err}");
                std::process::exit(1);
            }
        };

        let orchestrator = Orchestrator::new(LocalTransport::new(), settings);
        let mut updates = orchestrator.subscribe();

        tokio::spawn(async move {
            while updates.changed().await.is_ok() {
                match updates.borrow().clone() {
                    PipelineUpdate::Idle => println!("(reset)"),
                    PipelineUpdate::Quick(quick) => {
                        println!("quick: {:?}", quick.tense_type);
                    }
                    PipelineUpdate::Full(result) => {
                        println!(
                            "full: {:?} ({}%, valid: {})",
                            result.tense_type, result.completion_percentage, result.is_valid
                        );
                    }
                }
            }
        });

        use tokio::io::AsyncBufReadExt;
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        println!("type a sentence per line (ctrl-d to exit):");
        while let Ok(Some(line)) = lines.next_line().await {
            orchestrator.handle_input(&line).await;
        }

        // Let a final debounced analysis land before exiting.
        tokio::time::sleep(std::time::Duration::from_millis(700)).await;
    });
}
