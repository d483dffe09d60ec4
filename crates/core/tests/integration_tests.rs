//! Integration tests for cmdarg-core
//!
//! These tests drive complete parse workflows through the public API, from
//! registration or a YAML definition file through to the projected result.

use cmdarg_core::{
    definitions::load_parser_definition,
    error::Error,
    option::{NewOption, Value},
    parser::Parser,
    result::MissingOption,
};
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

fn recording_flag(short: &str, long: &str, calls: &Arc<Mutex<Vec<String>>>) -> NewOption {
    let calls = Arc::clone(calls);
    NewOption::new(short, long, "").handler(move |key, value| {
        let value = value.map(ToString::to_string).unwrap_or_default();
        calls.lock().unwrap().push(format!("{key}={value}"));
        Ok(())
    })
}

/// Flags and required options, all supplied: one entry per option, nothing missing
#[test]
fn test_flags_and_required_fully_supplied() {
    let mut parser = Parser::new();
    parser.add_option("-v", "--verbose", "Verbose").unwrap();
    parser.add_option("-q", "--quiet", "Quiet").unwrap();
    parser.add_option("-n", "--name value", "Name").unwrap();
    parser.add_option("-p", "--port number", "Port").unwrap();

    let result = parser
        .parse(&["--port", "8080", "-v", "-n", "web"])
        .unwrap();

    assert!(result.missing_options.is_empty());
    assert_eq!(result.passed_options.len(), 4);
    assert!(result.get_bool("verbose"));
    assert!(!result.get_bool("quiet"));
    assert_eq!(result.get_str("name"), Some("web"));
    assert_eq!(result.get_str("port"), Some("8080"));
}

/// Duplicate names fail whichever order they are registered in
#[test]
fn test_duplicates_rejected_in_any_order() {
    for (first, second) in [
        (("-a", "--all"), ("-a", "--other")),
        (("-a", "--other"), ("-a", "--all")),
        (("-a", "--all"), ("-b", "--all")),
        (("-b", "--all"), ("-a", "--all value")),
    ] {
        let mut parser = Parser::new();
        parser.add_option(first.0, first.1, "").unwrap();
        let result = parser.add_option(second.0, second.1, "");
        assert!(
            matches!(result, Err(Error::DuplicateOptions { .. })),
            "{first:?} then {second:?}"
        );
    }
}

/// A cluster of flags sets each one and runs handlers left to right
#[test]
fn test_coupled_flags_run_handlers_in_order() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut parser = Parser::new();
    parser.add_option_with(recording_flag("-a", "--all", &calls)).unwrap();
    parser.add_option_with(recording_flag("-b", "--brief", &calls)).unwrap();
    parser.add_option_with(recording_flag("-c", "--color", &calls)).unwrap();

    let result = parser.parse(&["-abc"]).unwrap();

    assert!(result.get_bool("all"));
    assert!(result.get_bool("brief"));
    assert!(result.get_bool("color"));
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["all=true", "brief=true", "color=true"]
    );
}

/// One value-taking letter poisons the whole cluster
#[test]
fn test_coupled_cluster_is_all_or_nothing() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut parser = Parser::new();
    parser.add_option_with(recording_flag("-a", "--all", &calls)).unwrap();
    parser.add_option_with(recording_flag("-b", "--brief", &calls)).unwrap();
    parser.add_option("-o", "--output [path]", "").unwrap();

    let result = parser.parse(&["-abo"]);

    assert!(matches!(result, Err(Error::InvalidOption { .. })));
    assert!(calls.lock().unwrap().is_empty());
}

#[test]
fn test_mutual_exclusion_of_flags() {
    let mut parser = Parser::new();
    parser.add_option("-a", "--alpha", "").unwrap();
    parser.add_option("-b", "--beta", "").unwrap();
    parser.make_options_mutually_exclusive(&["-a", "-b"]).unwrap();

    let result = parser.parse(&["-a", "-b"]);
    match result {
        Err(Error::MutuallyExclusiveOptions { options }) => {
            assert_eq!(options, vec!["-a", "-b"]);
        }
        other => panic!("Expected MutuallyExclusiveOptions, got {other:?}"),
    }

    let result = parser.parse(&["-ab"]);
    assert!(matches!(result, Err(Error::MutuallyExclusiveOptions { .. })));

    let result = parser.parse(&["-a"]).unwrap();
    assert_eq!(result.get("alpha"), Some(&Value::Bool(true)));
    assert_eq!(result.get("beta"), Some(&Value::Bool(false)));
}

/// Exclusion groups refuse optional-valued members
#[test]
fn test_optional_options_cannot_be_exclusive() {
    let mut parser = Parser::new();
    parser.add_option("-a", "--alpha", "").unwrap();
    parser.add_option("-o", "--output [path]", "").unwrap();

    let result = parser.make_options_mutually_exclusive(&["-a", "-o"]);
    assert!(matches!(
        result,
        Err(Error::InvalidMutuallyExclusiveOptions { .. })
    ));
    assert!(matches!(
        parser.make_options_mutually_exclusive(&["-a"]),
        Err(Error::EmptyMutualOptions)
    ));
}

/// Missing required options are only reported once every token is consumed
#[test]
fn test_missing_required_reported_after_exhaustion() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut parser = Parser::new();
    parser.add_option_with(recording_flag("-v", "--verbose", &calls)).unwrap();
    parser.add_option("-n", "--name value", "").unwrap();
    parser.add_option("-p", "--port value", "").unwrap();

    let result = parser.parse(&["-v", "-p", "80"]);

    match result {
        Err(Error::MissingOptions { options }) => {
            assert_eq!(
                options,
                vec![MissingOption {
                    short: "-n".to_string(),
                    long: "--name".to_string()
                }]
            );
        }
        other => panic!("Expected MissingOptions, got {other:?}"),
    }
    assert_eq!(*calls.lock().unwrap(), vec!["verbose=true"]);

    let resolved = parser.resolve(&["-v", "-p", "80"]).unwrap();
    assert_eq!(resolved.missing_options.len(), 1);
    assert_eq!(resolved.get_str("port"), Some("80"));
}

/// Derived keys are the camelCase form of the long name
#[test]
fn test_derived_keys() {
    let mut parser = Parser::new();
    parser.add_option("-o", "--output-dir value", "").unwrap();
    parser.add_option("-d", "--dry-run", "").unwrap();
    parser.add_option("-l", "--log-file-path [path]", "").unwrap();

    let result = parser
        .parse(&["-o", "dist", "-d", "--log-file-path", "x.log"])
        .unwrap();

    let keys: Vec<&str> = result.passed_options.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["outputDir", "dryRun", "logFilePath"]);
}

/// A registered multi-letter short wins over cluster expansion; an
/// unregistered one still expands into single-letter flags
#[test]
fn test_multi_letter_short_and_clusters() {
    let mut parser = Parser::new();
    parser.add_option("-a", "--all", "").unwrap();
    parser.add_option("-b", "--brief", "").unwrap();
    parser.add_option("-c", "--color", "").unwrap();
    parser.add_option("-d", "--dim", "").unwrap();

    let result = parser.parse(&["-ab"]).unwrap();
    assert!(result.get_bool("all"));
    assert!(result.get_bool("brief"));

    let result = parser.parse(&["-ab", "-cd"]);
    assert!(matches!(
        result,
        Err(Error::UnnecessaryArgument { argument, options }) if argument == "-cd" && options == "-ab"
    ));

    parser.add_option("-ab", "--all-brief", "").unwrap();
    let result = parser.parse(&["-ab", "-cd"]).unwrap();
    assert!(result.get_bool("allBrief"));
    assert!(!result.get_bool("all"));
    assert!(result.get_bool("color"));
    assert!(result.get_bool("dim"));
}

/// No tokens and no required options: only defaults come back
#[test]
fn test_empty_token_list() {
    let mut parser = Parser::new();
    parser.add_option("-v", "--verbose", "").unwrap();
    parser
        .add_option_with(NewOption::new("-f", "--format [kind]", "").default("text"))
        .unwrap();

    let empty: Vec<String> = Vec::new();
    let result = parser.parse(&empty).unwrap();

    assert!(result.missing_options.is_empty());
    assert_eq!(result.get("verbose"), Some(&Value::Bool(false)));
    assert_eq!(result.get_str("format"), Some("text"));
}

#[test]
fn test_parser_shared_across_threads() {
    let mut parser = Parser::new();
    parser.add_option("-n", "--name value", "").unwrap();
    let parser = Arc::new(parser);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let parser = Arc::clone(&parser);
            std::thread::spawn(move || {
                let name = format!("worker-{i}");
                let result = parser.parse(&["-n", name.as_str()]).unwrap();
                assert_eq!(result.get_str("name"), Some(name.as_str()));
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

/// Test loading a definition file and parsing against it
#[test]
fn test_definition_file_workflow() {
    let yaml_content = r#"
banner: "Usage: deploy [Options]"
options:
  - short: "-e"
    long: "--environment name"
    description: "Target environment"
  - short: "-r"
    long: "--region [region]"
    description: "Region"
    default: "eu-west-1"
  - short: "-d"
    long: "--dry-run"
    description: "Only print the plan"
  - short: "-f"
    long: "--force"
    description: "Skip confirmation"
groups:
  - title: "Placement:"
    options: ["-r"]
    tail: "Regions follow the provider's naming."
mutually_exclusive:
  - ["-d", "-f"]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let parser = load_parser_definition(&temp_path)
        .unwrap()
        .into_parser()
        .unwrap();

    let result = parser.parse(&["-e", "prod", "-r", "us-east-1", "-d"]).unwrap();
    assert_eq!(result.get_str("environment"), Some("prod"));
    assert_eq!(result.get_str("region"), Some("us-east-1"));
    assert!(result.get_bool("dryRun"));
    assert!(!result.get_bool("force"));

    assert!(matches!(
        parser.parse(&["-e", "prod", "-df"]),
        Err(Error::MutuallyExclusiveOptions { .. })
    ));

    let help = parser.help();
    let lines: Vec<&str> = help.lines().collect();
    assert_eq!(lines[0], "Usage: deploy [Options] [-d|-f]");
    assert_eq!(lines[1], "Common options:");
    assert!(help.contains("Placement:"));
    assert!(help.contains("Target environment (required)"));
    assert!(help.contains("Region [\"eu-west-1\"]"));
}

#[test]
fn test_missing_definition_file() {
    let result = load_parser_definition("/nonexistent/cmdarg/options.yml");
    match result {
        Err(e @ Error::Io { .. }) => assert_eq!(e.name(), "CliParserError:Io"),
        other => panic!("Expected Io error, got {other:?}"),
    }
}
