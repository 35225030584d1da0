//! Unified, `miette`-based diagnostics for the tooling around the AST.
//!
//! The AST itself has no failure modes. Errors only arise when trees are
//! loaded from disk (fixtures, the CLI), so every variant here describes an
//! I/O, decoding, discovery or checking failure.
//!
//! # Error Construction Macros
//!
//! - `err_msg!(Discovery, "no such directory: {}", path)` for message-only errors.
//! - `err_ctx!(Json, message, src, span)` when a source and span are known,
//!   optionally followed by a help string.

// ============================================================================
// IMPORTS
// ============================================================================

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================

pub type SourceArc = Arc<NamedSource<String>>;

type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type AstResult<T> = Result<T, AstError>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Byte range into a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Source, span and help attached to an error.
#[derive(Debug, Default)]
pub struct ErrorContext {
    pub source: Option<SourceArc>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl ErrorContext {
    /// Returns an empty error context (no source, span, or help).
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_source_and_span(source: SourceArc, span: Span) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: None,
        }
    }

    pub fn with_all(source: SourceArc, span: Span, help: String) -> Self {
        Self {
            source: Some(source),
            span: Some(span),
            help: Some(help),
        }
    }

    pub fn with_help(help: impl Into<String>) -> Self {
        Self {
            help: Some(help.into()),
            ..Self::default()
        }
    }
}

/// Every failure the fixture loader and the CLI can report.
#[derive(Debug, Error)]
pub enum AstError {
    #[error("I/O error: {message}")]
    Io {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("JSON error: {message}")]
    Json {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("Discovery error: {message}")]
    Discovery {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
    #[error("Check failed: {message}")]
    CheckFailed {
        message: String,
        ctx: ErrorContext,
        #[source]
        source: Option<BoxedCause>,
    },
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl AstError {
    fn get_ctx(&self) -> &ErrorContext {
        match self {
            AstError::Io { ctx, .. } => ctx,
            AstError::Json { ctx, .. } => ctx,
            AstError::Discovery { ctx, .. } => ctx,
            AstError::CheckFailed { ctx, .. } => ctx,
        }
    }

    fn message(&self) -> &str {
        match self {
            AstError::Io { message, .. } => message,
            AstError::Json { message, .. } => message,
            AstError::Discovery { message, .. } => message,
            AstError::CheckFailed { message, .. } => message,
        }
    }

    /// Attaches the underlying error that caused this one.
    pub fn caused_by<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let slot = match &mut self {
            AstError::Io { source, .. } => source,
            AstError::Json { source, .. } => source,
            AstError::Discovery { source, .. } => source,
            AstError::CheckFailed { source, .. } => source,
        };
        let cause: BoxedCause = Box::new(cause);
        *slot = Some(cause);
        self
    }

    /// Stable diagnostic code, e.g. `monkey_ast::json`.
    pub fn code_str(&self) -> &'static str {
        match self {
            AstError::Io { .. } => "monkey_ast::io",
            AstError::Json { .. } => "monkey_ast::json",
            AstError::Discovery { .. } => "monkey_ast::discovery",
            AstError::CheckFailed { .. } => "monkey_ast::check",
        }
    }

    pub fn span(&self) -> Option<Span> {
        self.get_ctx().span
    }
}

impl Diagnostic for AstError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.code_str()) as Box<dyn std::fmt::Display + 'a>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        self.get_ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn std::fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.get_ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.get_ctx().span?;
        let len = span.end.saturating_sub(span.start);
        let label = LabeledSpan::new(Some(self.message().to_string()), span.start, len);
        Some(Box::new(std::iter::once(label)))
    }
}

/// Wraps file content for use in error contexts.
pub fn to_error_source(name: impl AsRef<str>, content: impl Into<String>) -> SourceArc {
    Arc::new(NamedSource::new(name.as_ref(), content.into()))
}

/// Span covering the single character at `offset`, or an empty span at the end
/// of the content.
pub fn char_span(content: &str, offset: usize) -> Span {
    let width = content
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    Span {
        start: offset,
        end: offset + width,
    }
}

/// Converts a 1-based line/column pair into a byte offset into `content`.
///
/// Out-of-range positions clamp to the end of the content.
pub fn offset_of(content: &str, line: usize, column: usize) -> usize {
    let line_start: usize = content
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(content.len())
}

// ============================================================================
// CONSTRUCTION MACROS
// ============================================================================

/// Builds an `AstError` variant with a formatted message and no context.
#[macro_export]
macro_rules! err_msg {
    ($variant:ident, $($arg:tt)+) => {
        $crate::errors::AstError::$variant {
            message: format!($($arg)+),
            ctx: $crate::errors::ErrorContext::none(),
            source: None,
        }
    };
}

/// Builds an `AstError` variant carrying a source and span, and optionally help.
#[macro_export]
macro_rules! err_ctx {
    ($variant:ident, $msg:expr, $src:expr, $span:expr, $help:expr) => {
        $crate::errors::AstError::$variant {
            message: ($msg).into(),
            ctx: $crate::errors::ErrorContext::with_all($src, $span, ($help).into()),
            source: None,
        }
    };
    ($variant:ident, $msg:expr, $src:expr, $span:expr) => {
        $crate::errors::AstError::$variant {
            message: ($msg).into(),
            ctx: $crate::errors::ErrorContext::with_source_and_span($src, $span),
            source: None,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("abc\ndef", 1, 1), 0);
        assert_eq!(offset_of("abc\ndef", 1, 3), 2);
    }

    #[test]
    fn test_offset_of_later_line() {
        assert_eq!(offset_of("abc\ndef\nghi", 2, 2), 5);
        assert_eq!(offset_of("abc\ndef\nghi", 3, 1), 8);
    }

    #[test]
    fn test_offset_of_clamps() {
        assert_eq!(offset_of("abc", 9, 9), 3);
        assert_eq!(offset_of("", 1, 0), 0);
    }

    #[test]
    fn test_char_span() {
        assert_eq!(char_span("abc", 1), Span { start: 1, end: 2 });
        assert_eq!(char_span("aé", 1), Span { start: 1, end: 3 });
        assert_eq!(char_span("abc", 3), Span { start: 3, end: 3 });
    }

    #[test]
    fn test_diagnostic_code_and_label() {
        let src = to_error_source("prog.json", "{ bad }");
        let err = crate::err_ctx!(Json, "expected value", src, Span { start: 2, end: 3 }, "fix it");
        assert_eq!(err.code_str(), "monkey_ast::json");
        let labels: Vec<_> = err.labels().map(|l| l.collect()).unwrap_or_default();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 1);
        assert_eq!(err.help().map(|h| h.to_string()), Some("fix it".to_string()));
    }

    #[test]
    fn test_err_msg_has_no_context() {
        let err = crate::err_msg!(Discovery, "missing {}", "dir");
        assert_eq!(err.to_string(), "Discovery error: missing dir");
        assert!(err.span().is_none());
        assert!(err.source_code().is_none());
    }
}
