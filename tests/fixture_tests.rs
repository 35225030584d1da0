// tests/fixture_tests.rs

use std::fs;
use std::path::{Path, PathBuf};

use monkey_ast::ast::builder::{ident, int, let_stmt, program};
use monkey_ast::fixture::{check_path, discover_fixtures, load_program, Fixture};
use monkey_ast::AstError;

const FIXTURE_DIR: &str = "tests/fixtures";

/// A scratch directory unique to one test, removed on drop.
struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!(
            "monkey-ast-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        Scratch(dir)
    }

    fn write(&self, file: &str, content: &str) -> PathBuf {
        let path = self.0.join(file);
        fs::write(&path, content).unwrap();
        path
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn let_fixture_json(expected: &str, token_literal: Option<&str>) -> String {
    let fixture = Fixture {
        name: Some("let".to_string()),
        program: program(vec![let_stmt(ident("x"), Some(int(5)))]),
        expected: expected.to_string(),
        token_literal: token_literal.map(str::to_string),
    };
    serde_json::to_string_pretty(&fixture).unwrap()
}

// ---
// Golden fixtures shipped with the crate
// ---

#[test]
fn test_golden_fixtures_all_pass() {
    let summary = check_path(FIXTURE_DIR).expect("fixtures load");
    if let Some(report) = summary.failures().next() {
        panic!(
            "fixture {} failed: expected {:?}, got {:?}",
            report.name, report.expected, report.actual
        );
    }
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.passed, summary.total());
    assert!(summary.total() >= 7);
}

#[test]
fn test_discovery_is_sorted_and_recursive() {
    let files = discover_fixtures(FIXTURE_DIR).unwrap();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
    assert!(files
        .iter()
        .any(|p| p.ends_with("operators/precedence.json")));
    assert!(files.iter().all(|p| p.extension().unwrap() == "json"));
}

#[test]
fn test_load_golden_fixture() {
    let fixture = Fixture::load("tests/fixtures/let_integer.json").unwrap();
    assert_eq!(fixture.program.to_string(), "let x = 5;");
    assert!(fixture.check().passed());
}

// ---
// Reporting
// ---

#[test]
fn test_mismatched_rendering_is_reported() {
    let scratch = Scratch::new("mismatch");
    scratch.write("bad.json", &let_fixture_json("let x = 6;", None));
    scratch.write("good.json", &let_fixture_json("let x = 5;", Some("let")));
    scratch.write("notes.txt", "ignored");

    let summary = check_path(scratch.path()).unwrap();
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.failed, 1);

    let failure = summary.failures().next().unwrap();
    assert_eq!(failure.name, "let");
    assert_eq!(failure.expected, "let x = 6;");
    assert_eq!(failure.actual, "let x = 5;");
    assert!(failure.token_literal_matches());
}

#[test]
fn test_mismatched_token_literal_is_reported() {
    let scratch = Scratch::new("token-literal");
    let path = scratch.write("tok.json", &let_fixture_json("let x = 5;", Some("return")));

    let report = Fixture::load(path).unwrap().check();
    assert!(report.rendering_matches());
    assert!(!report.token_literal_matches());
    assert!(!report.passed());
    assert_eq!(report.actual_token_literal, "let");
}

#[test]
fn test_single_file_path_is_checked() {
    let scratch = Scratch::new("single");
    let path = scratch.write("only.json", &let_fixture_json("let x = 5;", None));

    let summary = check_path(&path).unwrap();
    assert_eq!(summary.total(), 1);
    assert_eq!(summary.passed, 1);
}

// ---
// Errors
// ---

#[test]
fn test_malformed_json_is_a_json_error() {
    let scratch = Scratch::new("malformed");
    let path = scratch.write("broken.json", "{ \"statements\": [ }");

    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, AstError::Json { .. }));
    assert_eq!(err.code_str(), "monkey_ast::json");
    assert!(err.span().is_some());
}

#[test]
fn test_unknown_node_tag_is_a_json_error() {
    let scratch = Scratch::new("unknown-node");
    let path = scratch.write(
        "unknown.json",
        r#"{ "statements": [ { "node": "while", "token": { "kind": "ident", "literal": "while" } } ] }"#,
    );

    let err = load_program(&path).unwrap_err();
    assert!(matches!(err, AstError::Json { .. }));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_program("tests/fixtures/does_not_exist.json").unwrap_err();
    assert!(matches!(err, AstError::Io { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_missing_directory_is_a_discovery_error() {
    let err = check_path("tests/no_such_fixture_dir").unwrap_err();
    assert!(matches!(err, AstError::Discovery { .. }));
}
