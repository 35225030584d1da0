//! Handles all user-facing output for the CLI.
//!
//! Rendering results, fixture diffs and summaries are printed from here so
//! every command shares the same colors and layout.

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::fixture::{CheckSummary, FixtureReport};

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Prints a program's rendering, optionally preceded by its token literal.
pub fn print_rendering(rendered: &str, token_literal: Option<&str>) {
    if let Some(literal) = token_literal {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
        print!("token literal:");
        let _ = stdout.reset();
        println!(" {:?}", literal);
    }
    println!("{}", rendered);
}

/// Prints one line per failing fixture with a character diff, then the totals.
pub fn print_summary(summary: &CheckSummary) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    for report in summary.failures() {
        print_failure(&mut stdout, report);
    }

    let color = if summary.failed == 0 {
        Color::Green
    } else {
        Color::Red
    };
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    println!(
        "{} passed, {} failed, {} total",
        summary.passed,
        summary.failed,
        summary.total()
    );
    let _ = stdout.reset();
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn print_failure(stdout: &mut StandardStream, report: &FixtureReport) {
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true));
    println!("--- FAIL: {} ---", report.name);
    let _ = stdout.reset();

    if !report.rendering_matches() {
        println!("expected: {}", report.expected);
        println!("actual:   {}", report.actual);
        let changeset = Changeset::new(&report.expected, &report.actual, "");
        print!("diff:     ");
        print_diff(stdout, &changeset.diffs);
        println!();
    }

    if !report.token_literal_matches() {
        println!(
            "token literal: expected {:?}, found {:?}",
            report.expected_token_literal.as_deref().unwrap_or_default(),
            report.actual_token_literal
        );
    }
    println!();
}

/// Inline diff: removed text in red brackets, added text in green braces.
fn print_diff(stdout: &mut StandardStream, diffs: &[Difference]) {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                let _ = stdout.reset();
                print!("{}", x);
            }
            Difference::Add(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
                print!("{{+{}}}", x);
            }
            Difference::Rem(ref x) => {
                let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)));
                print!("[-{}]", x);
            }
        }
    }
    let _ = stdout.reset();
}
