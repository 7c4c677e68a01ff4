/// Token-stream helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens within the current body window (`peek`, `advance`)
/// - Matching / expecting keywords and punctuation
/// - Skipping balanced bracket groups (`skip_group`)
impl<'a> Parser<'a> {
    // ========================================================================
    // Helpers
    // ========================================================================

    /// Return `true` once the current body's token range is exhausted.
    fn at_end(&self) -> bool {
        self.pos >= self.end
    }

    /// Return the current token without consuming it.
    ///
    /// At the end of the window this is the body's closing `}` (or `Eof` for the program).
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.end)]
    }

    /// Return the token after the current token without consuming it.
    fn peek_next(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.end)]
    }

    /// The most recently consumed token.
    fn previous(&self) -> &Token {
        &self.tokens[self.pos.saturating_sub(1)]
    }

    /// Advance to the next token (bounded by the window).
    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Return `true` if the current token is the given keyword.
    fn check_keyword(&self, id: KeywordId) -> bool {
        !self.at_end() && self.peek().kind.is_keyword(id)
    }

    /// Return `true` if the current token is the given punctuation.
    fn check_punct(&self, id: PunctuationId) -> bool {
        !self.at_end() && self.peek().kind.is_punctuation(id)
    }

    fn match_keyword(&mut self, id: KeywordId) -> bool {
        if self.check_keyword(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn match_punct(&mut self, id: PunctuationId) -> bool {
        if self.check_punct(id) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// `async function` on one line.
    fn check_async_function(&self) -> bool {
        self.check_keyword(KeywordId::Async)
            && self.peek_next().kind.is_keyword(KeywordId::Function)
            && !self.peek_next().newline_before
    }

    fn expect_keyword(&mut self, id: KeywordId) -> Result<(), CompileError> {
        if self.match_keyword(id) {
            Ok(())
        } else {
            Err(self.unexpected(&format!("Expected `{}`", keywords::as_str(id))))
        }
    }

    /// Expect a bracket group opened by `open` and skip past its closer.
    fn expect_group(&mut self, open: PunctuationId) -> Result<(), CompileError> {
        if self.check_punct(open) {
            self.skip_group()
        } else {
            Err(self.unexpected(&format!("Expected `{}`", punctuation::as_str(open))))
        }
    }

    /// Skip from the current opener to just past its matching closer.
    fn skip_group(&mut self) -> Result<(), CompileError> {
        match self.matching.get(self.pos).copied().flatten() {
            Some(close) if close > self.pos => {
                self.pos = close + 1;
                Ok(())
            }
            _ => Err(self.unexpected("Expected an opening delimiter")),
        }
    }

    /// Token index just past the group opened at `index`, or `index + 1` for any other token.
    fn past_group(&self, index: usize) -> usize {
        match self.matching.get(index).copied().flatten() {
            Some(close) if close > index => close + 1,
            _ => index + 1,
        }
    }

    /// Build an error at the current token.
    fn unexpected(&self, message: &str) -> CompileError {
        let token = self.peek();
        let found = if self.at_end() {
            "end of block".to_string()
        } else {
            describe_token(self.source, token)
        };
        CompileError::syntax(format!("{}, found {}", message, found), token.span)
    }
}

/// Short human-readable rendering of a token for error messages.
fn describe_token(source: &str, token: &Token) -> String {
    match &token.kind {
        TokenKind::Eof => "end of file".to_string(),
        TokenKind::Ident(name) => format!("identifier `{}`", name),
        TokenKind::String(_) => "string literal".to_string(),
        TokenKind::Template => "template literal".to_string(),
        TokenKind::Regex => "regular expression".to_string(),
        TokenKind::Number => "number".to_string(),
        _ => format!("`{}`", &source[token.span.start..token.span.end]),
    }
}
