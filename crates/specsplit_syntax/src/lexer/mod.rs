//! Lexer for JavaScript spec files
//!
//! Handles tokenization including:
//! - Identifiers, reserved words (`function`, `return`, ...) and private names (`#field`)
//! - Numeric, string, template and regular-expression literals
//! - Operators and punctuation (longest match against the `specsplit_core` registries)
//! - Comments, whitespace and a leading `#!` line as trivia
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)
//! - `literals` - String/template/regex scanning

mod literals;
pub mod tokens;

pub use tokens::{Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::CompileError;
use specsplit_core::lang::keywords::KeywordId;
use specsplit_core::lang::operators::{self, OperatorId};
use specsplit_core::lang::punctuation::{self, PunctuationId};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// A `/` is ambiguous: division or the start of a regex literal. The previous
// significant token decides:
//
//   [value]  ident, number, string, `)`, `]`, `x++`   → `/` is division
//   [other]  operator, keyword, `(`, `,`, `{`, `}`...  → `/` starts a regex
//
// Contextual words (`async`, `let`, `of`) are also valid binding names and
// count as values where the keyword reading cannot be followed by a regex.
// ============================================================================

/// Lexer for spec file source code.
///
/// Converts source text into a stream of tokens, handling:
/// - Reserved words and identifiers
/// - Literals (including nested template substitutions)
/// - Operators and punctuation
/// - Line-break tracking for automatic semicolon insertion
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    /// A line break was seen since the last token
    newline_before: bool,
    tokens: Vec<Token>,
    errors: Vec<CompileError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            newline_before: false,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<CompileError>> {
        if self.source.starts_with("#!") {
            self.skip_line();
        }

        loop {
            self.skip_trivia();
            if self.is_at_end() {
                break;
            }
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(self.pos, self.pos),
            self.newline_before,
        ));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.pos..].chars();
        iter.next();
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens
            .push(Token::new(kind, Span::new(start, self.pos), self.newline_before));
        self.newline_before = false;
    }

    fn error(&mut self, message: impl Into<String>, start: usize) {
        self.errors
            .push(CompileError::syntax(message.into(), Span::new(start, self.pos.max(start + 1))));
    }

    // ========================================================================
    // Trivia
    // ========================================================================

    /// Skip whitespace and comments, recording whether a line break was crossed.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                '\n' | '\u{2028}' | '\u{2029}' => {
                    self.newline_before = true;
                    self.advance();
                }
                c if c.is_whitespace() || c == '\u{feff}' => {
                    self.advance();
                }
                '/' if self.peek_next() == Some('/') => self.skip_line(),
                '/' if self.peek_next() == Some('*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) {
        let start = self.pos;
        self.pos += 2;
        match self.source[self.pos..].find("*/") {
            Some(offset) => {
                if self.source[self.pos..self.pos + offset].contains('\n') {
                    self.newline_before = true;
                }
                self.pos += offset + 2;
            }
            None => {
                self.pos = self.source.len();
                self.error("Unterminated block comment", start);
            }
        }
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        let start = self.pos;
        let Some(c) = self.peek() else {
            return;
        };

        match c {
            c if is_ident_start(c) => self.scan_identifier(start),
            '#' if self.peek_next().is_some_and(is_ident_start) => {
                self.advance();
                self.scan_identifier(start);
            }
            '0'..='9' => self.scan_number(start),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start),
            '\'' | '"' => self.scan_string(start, c),
            '`' => self.scan_template(start),
            '/' if self.regex_allowed() => self.scan_regex(start),
            _ => self.scan_symbol(start),
        }
    }

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.pos];

        // After `.` / `?.` a reserved word is a property name (`obj.default`).
        let after_access = self.tokens.last().is_some_and(|t| {
            t.kind.is_punctuation(PunctuationId::Dot) || t.kind.is_punctuation(PunctuationId::QuestionDot)
        });
        match keyword_id(spelling) {
            Some(id) if !after_access => self.add_token(TokenKind::Keyword(id), start),
            _ => self.add_token(TokenKind::Ident(spelling.to_string()), start),
        }
    }

    fn scan_number(&mut self, start: usize) {
        let is_hex = self.source[start..].starts_with("0x") || self.source[start..].starts_with("0X");
        let mut prev = '\0';
        while let Some(c) = self.peek() {
            let exponent_sign = (c == '+' || c == '-') && (prev == 'e' || prev == 'E') && !is_hex;
            if c.is_ascii_alphanumeric() || c == '_' || c == '.' || exponent_sign {
                prev = c;
                self.advance();
            } else {
                break;
            }
        }
        self.add_token(TokenKind::Number, start);
    }

    /// Longest match over punctuation and operator spellings.
    fn scan_symbol(&mut self, start: usize) {
        let rest = &self.source[start..];
        for len in (1..=operators::MAX_LEN.min(rest.len())).rev() {
            if !rest.is_char_boundary(len) {
                continue;
            }
            let candidate = &rest[..len];
            if let Some(id) = punctuation::from_str(candidate) {
                // `a?.5:1` is a conditional, not optional chaining.
                if id == PunctuationId::QuestionDot && rest[len..].starts_with(|c: char| c.is_ascii_digit()) {
                    continue;
                }
                self.pos += len;
                self.add_token(TokenKind::Punctuation(id), start);
                return;
            }
            if let Some(id) = operators::from_str(candidate) {
                self.pos += len;
                self.add_token(TokenKind::Operator(id), start);
                return;
            }
        }

        let c = self.advance().unwrap_or('\0');
        self.error(format!("Unexpected character '{}'", c), start);
    }

    /// Decide whether a `/` at the current position starts a regex literal.
    fn regex_allowed(&self) -> bool {
        let mut recent = self.tokens.iter().rev();
        let Some(prev) = recent.next() else {
            return true;
        };
        match &prev.kind {
            // As keywords these never take a regex operand, so a `/` after them divides a binding.
            TokenKind::Keyword(KeywordId::Async | KeywordId::Let) => false,
            // `for (x of /re/...)` follows a binding; `of / 2` uses one.
            TokenKind::Keyword(KeywordId::Of) => recent
                .next()
                .is_some_and(|t| ends_value(&t.kind) || t.kind.is_punctuation(PunctuationId::RBrace)),
            kind => !ends_value(kind),
        }
    }
}

/// `true` if a `/` after a token of this kind is division.
fn ends_value(kind: &TokenKind) -> bool {
    match kind {
        TokenKind::Ident(_) | TokenKind::Number | TokenKind::String(_) | TokenKind::Template | TokenKind::Regex => true,
        TokenKind::Punctuation(PunctuationId::RParen | PunctuationId::RBracket) => true,
        TokenKind::Operator(OperatorId::PlusPlus | OperatorId::MinusMinus) => true,
        TokenKind::Punctuation(_) | TokenKind::Operator(_) | TokenKind::Keyword(_) | TokenKind::Eof => false,
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier.
fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$' || c == '\u{200c}' || c == '\u{200d}'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<CompileError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
