//! Golden fixtures for round-trip verification of parser output.
//!
//! A fixture is a JSON file holding a serialized [`Program`] together with
//! the text it must render to:
//!
//! ```json
//! {
//!   "name": "let with integer",
//!   "program": { "statements": [ ... ] },
//!   "expected": "let x = 5;",
//!   "token_literal": "let"
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::ast::{Node, Program};
use crate::errors::{char_span, offset_of, to_error_source, AstError, AstResult, ErrorContext};
use crate::{err_ctx, err_msg};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub name: Option<String>,
    pub program: Program,
    pub expected: String,
    #[serde(default)]
    pub token_literal: Option<String>,
}

/// Outcome of checking a single fixture.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureReport {
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub expected_token_literal: Option<String>,
    pub actual_token_literal: String,
}

/// Aggregate outcome of checking every fixture under a path.
#[derive(Debug, Clone, Default)]
pub struct CheckSummary {
    pub reports: Vec<FixtureReport>,
    pub passed: usize,
    pub failed: usize,
}

// ============================================================================
// LOADING
// ============================================================================

impl Fixture {
    /// Reads and decodes a fixture file.
    pub fn load(path: impl AsRef<Path>) -> AstResult<Self> {
        let path = path.as_ref();
        let content = read_file(path)?;
        decode(path, &content)
    }

    /// Renders the program and compares it against the expectations.
    pub fn check(&self) -> FixtureReport {
        FixtureReport {
            name: self.name.clone().unwrap_or_else(|| "<unnamed>".to_string()),
            expected: self.expected.clone(),
            actual: self.program.to_string(),
            expected_token_literal: self.token_literal.clone(),
            actual_token_literal: self.program.token_literal().to_string(),
        }
    }
}

/// Reads a serialized [`Program`] (without the fixture envelope).
pub fn load_program(path: impl AsRef<Path>) -> AstResult<Program> {
    let path = path.as_ref();
    let content = read_file(path)?;
    decode(path, &content)
}

fn read_file(path: &Path) -> AstResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AstError::Io {
            message: format!("cannot read {}", path.display()),
            ctx: ErrorContext::none(),
            source: None,
        }
        .caused_by(e)
    })
}

fn decode<T: serde::de::DeserializeOwned>(path: &Path, content: &str) -> AstResult<T> {
    serde_json::from_str(content).map_err(|e| {
        let offset = offset_of(content, e.line(), e.column());
        let src = to_error_source(path.display().to_string(), content);
        err_ctx!(
            Json,
            e.to_string(),
            src,
            char_span(content, offset),
            "the file must hold a serialized program tree"
        )
        .caused_by(e)
    })
}

// ============================================================================
// DISCOVERY AND CHECKING
// ============================================================================

/// Recursively collects `.json` files under `root`, sorted for a stable order.
///
/// A `root` that is itself a file is returned as the only entry.
pub fn discover_fixtures(root: impl AsRef<Path>) -> AstResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(err_msg!(Discovery, "no such path: {}", root.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| {
            err_msg!(Discovery, "failed to walk {}", root.display()).caused_by(e)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !is_fixture_file(path) {
            continue;
        }

        files.push(path.to_path_buf());
    }
    files.sort();
    Ok(files)
}

/// Discovers and checks every fixture under `root`.
///
/// Fails on the first fixture that cannot be loaded; mismatches are reported
/// in the summary instead.
pub fn check_path(root: impl AsRef<Path>) -> AstResult<CheckSummary> {
    let mut summary = CheckSummary::default();
    for path in discover_fixtures(root)? {
        let mut report = Fixture::load(&path)?.check();
        if report.name == "<unnamed>" {
            report.name = path.display().to_string();
        }
        summary.record(report);
    }
    Ok(summary)
}

fn is_fixture_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("json")
}

impl FixtureReport {
    pub fn rendering_matches(&self) -> bool {
        self.expected == self.actual
    }

    /// An absent token-literal expectation always matches.
    pub fn token_literal_matches(&self) -> bool {
        self.expected_token_literal
            .as_deref()
            .map_or(true, |expected| expected == self.actual_token_literal)
    }

    pub fn passed(&self) -> bool {
        self.rendering_matches() && self.token_literal_matches()
    }
}

impl CheckSummary {
    pub fn record(&mut self, report: FixtureReport) {
        if report.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.reports.push(report);
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn failures(&self) -> impl Iterator<Item = &FixtureReport> {
        self.reports.iter().filter(|r| !r.passed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_fixture_file() {
        assert!(is_fixture_file(Path::new("tests/fixtures/let.json")));
        assert!(!is_fixture_file(Path::new("tests/fixtures/README.md")));
        assert!(!is_fixture_file(Path::new("tests/fixtures/json")));
    }

    #[test]
    fn test_decode_error_points_at_position() {
        let content = "{\n  \"statements\": [,]\n}";
        let err = decode::<Program>(Path::new("broken.json"), content).unwrap_err();
        assert_eq!(err.code_str(), "monkey_ast::json");
        let span = err.span().expect("json errors carry a span");
        assert_eq!(content[..span.start].matches('\n').count(), 1);
    }
}
