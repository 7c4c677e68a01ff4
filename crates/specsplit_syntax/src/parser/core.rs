/// Parser core types and entrypoint.
///
/// This chunk defines the [`Parser`] type, its top-level `parse()` entrypoint and the body loop
/// that registers statements in the arena.
///
/// ## Notes
/// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
///   single module while avoiding a single “god file”.

/// Parser state.
///
/// ## Notes
/// - The parser works on one statement list at a time: `pos..end` is the token range of the
///   current body. Parsing a function body saves and restores that window.
/// - A statement error abandons the rest of the enclosing body; the remaining bodies still parse
///   so independent errors are reported together.
pub struct Parser<'a> {
    source: &'a str,
    tokens: &'a [Token],
    pos: usize,
    /// Exclusive token bound of the body being parsed.
    end: usize,
    /// Index of the matching delimiter for every bracket token.
    matching: Vec<Option<usize>>,
    stmts: Vec<Stmt>,
    bodies: Vec<Body>,
    errors: Vec<CompileError>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for a token stream.
    ///
    /// ## Parameters
    /// - `source`: Source text the tokens were produced from.
    /// - `tokens`: Token stream produced by `specsplit_syntax::lexer`, ending in `Eof`.
    pub fn new(source: &'a str, tokens: &'a [Token]) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            end: tokens.len().saturating_sub(1),
            matching: Vec::new(),
            stmts: Vec::new(),
            bodies: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Parse the entire token stream into a [`SyntaxTree`].
    ///
    /// ## Errors
    /// Returns every [`CompileError`] found: delimiter errors first (and only those, if any), then
    /// statement errors from each body.
    pub fn parse(mut self) -> Result<SyntaxTree, Vec<CompileError>> {
        if !self.tokens.last().is_some_and(|t| t.kind.is_eof()) {
            return Err(vec![CompileError::new(
                "Token stream must end with Eof".to_string(),
                Span::new(self.source.len(), self.source.len()),
            )]);
        }

        self.matching = match_delimiters(self.tokens)?;

        let eof = self.tokens.len() - 1;
        self.parse_body(0, eof, Span::new(0, self.source.len()));

        if self.errors.is_empty() {
            Ok(SyntaxTree {
                source: self.source.to_string(),
                stmts: self.stmts,
                bodies: self.bodies,
            })
        } else {
            Err(self.errors)
        }
    }

    /// Parse tokens `start..end` as a statement list covering the bytes of `content`.
    fn parse_body(&mut self, start: usize, end: usize, content: Span) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(Body {
            stmts: Vec::new(),
            content,
        });

        let saved = (self.pos, self.end);
        self.pos = start;
        self.end = end;

        let mut parsed: Vec<(StmtKind, Span)> = Vec::new();
        while !self.at_end() {
            let first = self.pos;
            match self.statement() {
                Ok(kind) => {
                    let last = self.pos;
                    let kind = match kind {
                        StmtKind::Expression(Expr::Other) => match self.call_expression(first, last) {
                            Some(call) => StmtKind::Expression(Expr::Call(call)),
                            None => StmtKind::Expression(Expr::Other),
                        },
                        other => other,
                    };
                    let span = self.tokens[first].span.merge(self.tokens[last - 1].span);
                    parsed.push((kind, span));
                }
                Err(e) => {
                    self.errors.push(e);
                    break;
                }
            }
        }

        let starts: Vec<usize> = parsed.iter().map(|(_, span)| span.start).collect();
        let mut cursor = content.start;
        let mut ids = Vec::with_capacity(parsed.len());
        for (i, (kind, span)) in parsed.into_iter().enumerate() {
            let limit = starts.get(i + 1).copied().unwrap_or(content.end);
            let full_end = trailing_comment_end(self.source, span.end, limit);
            ids.push(StmtId(self.stmts.len()));
            self.stmts.push(Stmt {
                kind,
                span,
                full: Span::new(cursor, full_end),
            });
            cursor = full_end;
        }
        self.bodies[id.0].stmts = ids;

        (self.pos, self.end) = saved;
        id
    }
}
