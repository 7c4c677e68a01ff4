//! Diagnostics and error reporting for spec file parsing
//!
//! Errors carry a byte span; [`format_error`] renders them with a source snippet through miette.

use std::fmt;

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};

use crate::ast::Span;

/// A syntax error with location information
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub message: String,
    pub span: Span,
    pub kind: ErrorKind,
    pub notes: Vec<String>,
    pub hints: Vec<String>,
}

impl CompileError {
    pub fn new(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Error,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn syntax(message: String, span: Span) -> Self {
        Self {
            message,
            span,
            kind: ErrorKind::Syntax,
            notes: Vec::new(),
            hints: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hints.push(hint.into());
        self
    }
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CompileError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Error,
    Syntax,
    Warning,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Error => write!(f, "error"),
            ErrorKind::Syntax => write!(f, "syntax error"),
            ErrorKind::Warning => write!(f, "warning"),
        }
    }
}

/// A [`CompileError`] bound to its source file, in the shape miette renders.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{kind}: {message}")]
pub struct SourceDiagnostic {
    kind: ErrorKind,
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
    #[help]
    help: Option<String>,
}

impl SourceDiagnostic {
    pub fn new(file_name: &str, source: &str, error: &CompileError) -> Self {
        let start = error.span.start.min(source.len());
        let len = error.span.len().min(source.len() - start);
        let mut help: Vec<String> = error.notes.iter().map(|n| format!("note: {}", n)).collect();
        help.extend(error.hints.iter().cloned());
        Self {
            kind: error.kind,
            message: error.message.clone(),
            src: NamedSource::new(file_name, source.to_string()),
            span: (start, len).into(),
            help: if help.is_empty() { None } else { Some(help.join("\n")) },
        }
    }
}

/// Render an error with source context as plain text.
pub fn format_error(file_name: &str, source: &str, error: &CompileError) -> String {
    let diagnostic = SourceDiagnostic::new(file_name, source, error);
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    if handler.render_report(&mut out, &diagnostic).is_err() {
        // Fall back to the location-only form.
        let (line, col) = line_col(source, error.span.start);
        return format!("{}:{}:{}: {}\n", file_name, line, col, error);
    }
    out
}

/// Render every error in `errors`, separated by blank lines.
pub fn format_errors(file_name: &str, source: &str, errors: &[CompileError]) -> String {
    errors
        .iter()
        .map(|e| format_error(file_name, source, e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1-based line and column for a byte offset
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, offset - line_start + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col() {
        let source = "a\nbc\ndef";
        assert_eq!(line_col(source, 0), (1, 1));
        assert_eq!(line_col(source, 3), (2, 2));
        assert_eq!(line_col(source, 5), (3, 1));
        assert_eq!(line_col(source, 100), (3, 4));
    }

    #[test]
    fn test_format_error_mentions_file_and_message() {
        let source = "describe('A', () => {\n";
        let err = CompileError::syntax("Unclosed `{`".to_string(), Span::new(20, 21)).with_hint("Add a closing `}`");
        let rendered = format_error("a.spec.js", source, &err);
        assert!(rendered.contains("Unclosed `{`"), "{}", rendered);
        assert!(rendered.contains("a.spec.js"), "{}", rendered);
        assert!(rendered.contains("Add a closing `}`"), "{}", rendered);
    }

    #[test]
    fn test_format_error_clamps_out_of_range_span() {
        let err = CompileError::syntax("Unexpected end of file".to_string(), Span::new(10, 50));
        let rendered = format_error("x.js", "abc", &err);
        assert!(rendered.contains("Unexpected end of file"));
    }
}
