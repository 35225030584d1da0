// Regression tests for the monkey-ast binary.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use std::fs;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn monkey_ast() -> Command {
    Command::cargo_bin("monkey-ast").unwrap()
}

#[test]
fn cli_renders_a_program() {
    let program = "tests/cli_render_program.json";
    fs::write(
        program,
        r#"{ "statements": [ { "node": "return", "token": { "kind": "return", "literal": "return" },
             "return_value": { "node": "prefix", "token": { "kind": "bang", "literal": "!" },
               "operator": "!", "right": { "node": "boolean", "token": { "kind": "true", "literal": "true" }, "value": true } } } ] }"#,
    )
    .unwrap();

    monkey_ast()
        .arg("render")
        .arg(program)
        .arg("--token-literal")
        .assert()
        .success()
        .stdout(contains("return (!true);").and(contains("\"return\"")));

    let _ = fs::remove_file(program);
}

#[test]
fn cli_check_passes_on_golden_fixtures() {
    monkey_ast()
        .arg("check")
        .arg("tests/fixtures")
        .assert()
        .success()
        .stdout(contains("0 failed"));
}

#[test]
fn cli_check_reports_failing_fixture() {
    let dir = "tests/cli_failing_fixtures";
    fs::create_dir_all(dir).unwrap();
    fs::write(
        format!("{dir}/wrong.json"),
        r#"{ "name": "wrong expectation",
             "program": { "statements": [ { "node": "return", "token": { "kind": "return", "literal": "return" } } ] },
             "expected": "return x;" }"#,
    )
    .unwrap();

    monkey_ast()
        .arg("check")
        .arg(dir)
        .assert()
        .failure()
        .stdout(contains("FAIL: wrong expectation").and(contains("1 failed")))
        .stderr(contains("monkey_ast::check"));

    let _ = fs::remove_dir_all(dir);
}

#[test]
fn cli_reports_miette_diagnostics_on_bad_json() {
    let bad_file = "tests/cli_bad_program.json";
    fs::write(bad_file, "{ \"statements\": [ ").unwrap();

    monkey_ast()
        .arg("render")
        .arg(bad_file)
        .assert()
        .failure()
        .stderr(contains("monkey_ast::json").or(contains("help:")));

    let _ = fs::remove_file(bad_file);
}
