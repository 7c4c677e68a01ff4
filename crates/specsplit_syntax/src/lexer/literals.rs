//! Literal scanning for the spec file lexer
//!
//! Handles quoted strings, template literals (with nested `${...}` substitutions) and regular
//! expression literals. Literal contents are not unescaped; the splitter only ever copies source text.

use super::Lexer;
use super::tokens::TokenKind;

impl<'a> Lexer<'a> {
    // ========================================================================
    // Strings
    // ========================================================================

    /// Scan a `'...'` or `"..."` literal starting at `start` (the opening quote).
    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        self.advance();
        if self.skip_string_body(quote) {
            let contents = self.source[start + 1..self.pos - 1].to_string();
            self.add_token(TokenKind::String(contents), start);
        } else {
            self.error("Unterminated string literal", start);
        }
    }

    /// Consume string characters up to and including the closing `quote`.
    ///
    /// Returns `false` at an unescaped line break or end of input.
    fn skip_string_body(&mut self, quote: char) -> bool {
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '\n' => return false,
                c if c == quote => {
                    self.advance();
                    return true;
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }

    // ========================================================================
    // Templates
    // ========================================================================

    /// Scan a template literal starting at `start` (the opening backtick).
    pub(super) fn scan_template(&mut self, start: usize) {
        self.advance();
        if self.skip_template_body() {
            self.add_token(TokenKind::Template, start);
        } else {
            self.error("Unterminated template literal", start);
        }
    }

    /// Consume template characters up to and including the closing backtick.
    fn skip_template_body(&mut self) -> bool {
        while let Some(c) = self.peek() {
            match c {
                '\\' => {
                    self.advance();
                    self.advance();
                }
                '`' => {
                    self.advance();
                    return true;
                }
                '$' if self.peek_next() == Some('{') => {
                    self.advance();
                    self.advance();
                    if !self.skip_substitution() {
                        return false;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }

    /// Consume a `${ ... }` substitution body up to and including its closing brace.
    fn skip_substitution(&mut self) -> bool {
        let mut depth = 1usize;
        while let Some(c) = self.peek() {
            match c {
                '{' => {
                    depth += 1;
                    self.advance();
                }
                '}' => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        return true;
                    }
                }
                '\'' | '"' => {
                    self.advance();
                    if !self.skip_string_body(c) {
                        return false;
                    }
                }
                '`' => {
                    self.advance();
                    if !self.skip_template_body() {
                        return false;
                    }
                }
                '/' if self.peek_next() == Some('/') => self.skip_line(),
                '/' if self.peek_next() == Some('*') => {
                    let before = self.errors.len();
                    let newline = self.newline_before;
                    self.skip_block_comment();
                    // Line breaks inside a template do not precede the next token.
                    self.newline_before = newline;
                    if self.errors.len() > before {
                        self.errors.truncate(before);
                        return false;
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
        false
    }

    // ========================================================================
    // Regular expressions
    // ========================================================================

    /// Scan a `/pattern/flags` literal starting at `start` (the opening slash).
    pub(super) fn scan_regex(&mut self, start: usize) {
        self.advance();
        let mut in_class = false;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error("Unterminated regular expression literal", start);
                    return;
                }
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('[') => {
                    in_class = true;
                    self.advance();
                }
                Some(']') => {
                    in_class = false;
                    self.advance();
                }
                Some('/') if !in_class => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }

        while let Some(c) = self.peek() {
            if c.is_ascii_alphabetic() {
                self.advance();
            } else {
                break;
            }
        }
        self.add_token(TokenKind::Regex, start);
    }
}
