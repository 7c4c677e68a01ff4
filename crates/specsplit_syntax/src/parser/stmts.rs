/// Statement boundary parsing.
///
/// Each `statement()` call consumes exactly one statement from the current window and reports its
/// shape. Nested statements (an `if` body, a loop body) are consumed but not registered; only the
/// body loop in `core.rs` turns statements into arena nodes.
///
/// ## Notes
/// - Automatic semicolon insertion is approximated with `TokenKind::can_end_expression` and
///   `TokenKind::continues_expression`: a line break ends an expression statement only between a
///   token that can close an expression and one that cannot continue it.
/// - `return`, `throw`, `break` and `continue` are restricted: a line break right after them ends
///   the statement.
impl<'a> Parser<'a> {
    /// Parse one statement and return its kind.
    fn statement(&mut self) -> Result<StmtKind, CompileError> {
        if self.at_end() {
            return Err(self.unexpected("Expected a statement"));
        }

        if let Some(id) = self.peek().punctuation_id() {
            match id {
                PunctuationId::LBrace => {
                    self.skip_group()?;
                    return Ok(StmtKind::Block);
                }
                PunctuationId::Semicolon => {
                    self.advance();
                    return Ok(StmtKind::Empty);
                }
                _ => {}
            }
        }

        if let Some(id) = self.peek().keyword_id() {
            return self.keyword_statement(id);
        }

        if let TokenKind::Ident(label) = &self.peek().kind {
            if self.pos + 1 < self.end && self.peek_next().kind.is_punctuation(PunctuationId::Colon) {
                let label = label.clone();
                self.advance();
                self.advance();
                self.sub_statement()?;
                return Ok(StmtKind::Labeled(label));
            }
        }

        self.expression_tail()?;
        Ok(StmtKind::Expression(Expr::Other))
    }

    /// Parse a statement that starts with a reserved word.
    fn keyword_statement(&mut self, id: KeywordId) -> Result<StmtKind, CompileError> {
        match id {
            KeywordId::If => {
                self.advance();
                self.expect_group(PunctuationId::LParen)?;
                self.sub_statement()?;
                if self.match_keyword(KeywordId::Else) {
                    self.sub_statement()?;
                }
                Ok(StmtKind::Control(id))
            }
            KeywordId::For => {
                self.advance();
                self.match_keyword(KeywordId::Await);
                self.expect_group(PunctuationId::LParen)?;
                self.sub_statement()?;
                Ok(StmtKind::Control(id))
            }
            KeywordId::While | KeywordId::With => {
                self.advance();
                self.expect_group(PunctuationId::LParen)?;
                self.sub_statement()?;
                Ok(StmtKind::Control(id))
            }
            KeywordId::Do => {
                self.advance();
                self.sub_statement()?;
                self.expect_keyword(KeywordId::While)?;
                self.expect_group(PunctuationId::LParen)?;
                self.match_punct(PunctuationId::Semicolon);
                Ok(StmtKind::Control(id))
            }
            KeywordId::Try => {
                self.try_statement()?;
                Ok(StmtKind::Control(id))
            }
            KeywordId::Switch => {
                self.advance();
                self.expect_group(PunctuationId::LParen)?;
                self.expect_group(PunctuationId::LBrace)?;
                Ok(StmtKind::Control(id))
            }
            KeywordId::Function => {
                self.function_declaration()?;
                Ok(StmtKind::Declaration(KeywordId::Function))
            }
            KeywordId::Async if self.check_async_function() => {
                self.advance();
                self.function_declaration()?;
                Ok(StmtKind::Declaration(KeywordId::Function))
            }
            KeywordId::Class => {
                self.class_declaration()?;
                Ok(StmtKind::Declaration(id))
            }
            KeywordId::Const | KeywordId::Let | KeywordId::Var => {
                self.expression_tail()?;
                Ok(StmtKind::Declaration(id))
            }
            KeywordId::Import => {
                // `import(...)` and `import.meta` are expressions.
                let next = &self.peek_next().kind;
                if next.is_punctuation(PunctuationId::LParen) || next.is_punctuation(PunctuationId::Dot) {
                    self.expression_tail()?;
                    return Ok(StmtKind::Expression(Expr::Other));
                }
                self.expression_tail()?;
                Ok(StmtKind::Module(id))
            }
            KeywordId::Export => {
                self.export_statement()?;
                Ok(StmtKind::Module(id))
            }
            KeywordId::Return | KeywordId::Throw | KeywordId::Break | KeywordId::Continue => {
                self.advance();
                if self.at_end() || self.peek().newline_before || self.check_punct(PunctuationId::Semicolon) {
                    self.match_punct(PunctuationId::Semicolon);
                } else {
                    self.expression_tail()?;
                }
                Ok(StmtKind::Jump(id))
            }
            KeywordId::Else | KeywordId::Catch | KeywordId::Finally | KeywordId::Case | KeywordId::Default => {
                Err(self.unexpected("Expected a statement"))
            }
            _ => {
                self.expression_tail()?;
                Ok(StmtKind::Expression(Expr::Other))
            }
        }
    }

    /// Parse a nested statement (loop or branch body) without registering it.
    fn sub_statement(&mut self) -> Result<(), CompileError> {
        self.statement().map(|_| ())
    }

    /// `try { } catch (e) { } finally { }`
    fn try_statement(&mut self) -> Result<(), CompileError> {
        self.advance();
        self.expect_group(PunctuationId::LBrace)?;

        let mut handled = false;
        if self.match_keyword(KeywordId::Catch) {
            if self.check_punct(PunctuationId::LParen) {
                self.skip_group()?;
            }
            self.expect_group(PunctuationId::LBrace)?;
            handled = true;
        }
        if self.match_keyword(KeywordId::Finally) {
            self.expect_group(PunctuationId::LBrace)?;
            handled = true;
        }

        if handled {
            Ok(())
        } else {
            Err(self.unexpected("Expected `catch` or `finally` after `try` block"))
        }
    }

    /// `function [*] [name] (params) { body }` starting at `function`.
    fn function_declaration(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(KeywordId::Function)?;
        if !self.at_end() && self.peek().kind.is_operator(OperatorId::Star) {
            self.advance();
        }
        if !self.at_end() && matches!(self.peek().kind, TokenKind::Ident(_)) {
            self.advance();
        }
        self.expect_group(PunctuationId::LParen)?;
        self.expect_group(PunctuationId::LBrace)
    }

    /// `class [name] [extends expr] { members }` starting at `class`.
    fn class_declaration(&mut self) -> Result<(), CompileError> {
        self.advance();
        while !self.at_end() {
            if self.check_punct(PunctuationId::LBrace) {
                return self.skip_group();
            }
            self.pos = self.past_group(self.pos);
        }
        Err(self.unexpected("Expected class body `{`"))
    }

    /// `export ...` in any of its forms.
    fn export_statement(&mut self) -> Result<(), CompileError> {
        self.advance();
        let is_default = self.match_keyword(KeywordId::Default);

        if self.check_keyword(KeywordId::Function) {
            return self.function_declaration();
        }
        if self.check_async_function() {
            self.advance();
            return self.function_declaration();
        }
        if self.check_keyword(KeywordId::Class) {
            return self.class_declaration();
        }
        if self.at_end() {
            let what = if is_default { "Expected an expression after `export default`" } else { "Expected a declaration after `export`" };
            return Err(self.unexpected(what));
        }
        self.expression_tail()
    }

    /// Consume tokens up to the end of an expression-like statement.
    ///
    /// Ends after `;`, at the end of the window, or at an automatic semicolon insertion point.
    fn expression_tail(&mut self) -> Result<(), CompileError> {
        let start = self.pos;
        while !self.at_end() {
            let token = self.peek();
            if token.kind.is_punctuation(PunctuationId::Semicolon) {
                self.advance();
                break;
            }
            if self.pos > start
                && token.newline_before
                && self.previous().kind.can_end_expression()
                && !token.kind.continues_expression()
            {
                break;
            }
            if token.punctuation_id().is_some_and(punctuation::is_closing) {
                return Err(self.unexpected("Unexpected closing delimiter"));
            }
            self.pos = self.past_group(self.pos);
        }
        Ok(())
    }
}
