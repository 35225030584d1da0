//! Defines the command-line arguments and subcommands for the monkey-ast CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "monkey-ast",
    version,
    about = "Render serialized Monkey syntax trees and check them against golden text."
)]
pub struct AstArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the canonical rendering of a serialized program.
    Render {
        /// The path to the JSON program file.
        #[arg(required = true)]
        file: PathBuf,
        /// Also print the program's token literal.
        #[arg(long)]
        token_literal: bool,
    },
    /// Check every golden fixture under a file or directory.
    Check {
        /// The fixture file or directory to scan for `.json` fixtures.
        #[arg(default_value = "tests/fixtures")]
        path: PathBuf,
    },
}
