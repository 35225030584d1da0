//! The monkey-ast Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use crate::ast::Node;
use crate::cli::args::{AstArgs, Command};
use crate::errors::{AstError, AstResult, ErrorContext};
use crate::fixture;
use clap::Parser;
use std::path::Path;
use std::process;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = AstArgs::parse();

    // Dispatch to the appropriate subcommand handler.
    let result = match args.command {
        Command::Render {
            file,
            token_literal,
        } => handle_render(&file, token_literal),
        Command::Check { path } => handle_check(&path),
    };

    if let Err(e) = result {
        let report = miette::Report::new(e);
        eprintln!("{report:?}");
        process::exit(1);
    }
}

/// Handles the `render` subcommand.
fn handle_render(path: &Path, show_token_literal: bool) -> AstResult<()> {
    let program = fixture::load_program(path)?;
    let rendered = program.to_string();
    let token_literal = show_token_literal.then(|| program.token_literal());
    output::print_rendering(&rendered, token_literal);
    Ok(())
}

/// Handles the `check` subcommand.
fn handle_check(path: &Path) -> AstResult<()> {
    let summary = fixture::check_path(path)?;
    output::print_summary(&summary);

    if summary.failed > 0 {
        return Err(AstError::CheckFailed {
            message: format!("{} of {} fixtures failed", summary.failed, summary.total()),
            ctx: ErrorContext::with_help("compare the expected and actual renderings above"),
            source: None,
        });
    }
    Ok(())
}
