/// Call statement recognition.
///
/// An expression statement is recorded as a [`CallExpr`] when its tokens are exactly
/// `name(.name)* ( args ) [;]`. Arguments are split at top-level commas; function literal arguments
/// with block bodies get their bodies parsed into the arena.
impl<'a> Parser<'a> {
    /// Recognize tokens `start..end` (one complete statement) as a call statement.
    fn call_expression(&mut self, start: usize, end: usize) -> Option<CallExpr> {
        let mut end = end;
        if end > start && self.tokens[end - 1].kind.is_punctuation(PunctuationId::Semicolon) {
            end -= 1;
        }

        // Callee path: `a`, `a.b`, `a.b.c`
        let mut path = Vec::new();
        let mut i = start;
        loop {
            match &self.tokens.get(i)?.kind {
                TokenKind::Ident(name) if i < end => path.push(name.clone()),
                _ => return None,
            }
            i += 1;
            if i < end && self.tokens[i].kind.is_punctuation(PunctuationId::Dot) {
                i += 1;
                continue;
            }
            break;
        }

        let open = i;
        if open >= end || !self.tokens[open].kind.is_punctuation(PunctuationId::LParen) {
            return None;
        }
        let close = self.matching.get(open).copied().flatten()?;
        if close + 1 != end {
            return None;
        }

        let callee_span = self.tokens[start].span.merge(self.tokens[open - 1].span);
        let callee = if path.len() == 1 {
            Callee::Name(path.remove(0))
        } else {
            Callee::Member(path)
        };

        let mut args = Vec::new();
        for (arg_start, arg_end) in self.split_arguments(open + 1, close) {
            args.push(self.argument(arg_start, arg_end));
        }

        Some(CallExpr {
            callee,
            callee_span,
            args,
        })
    }

    /// Token ranges of the comma-separated arguments between `start` and `end`.
    fn split_arguments(&self, start: usize, end: usize) -> Vec<(usize, usize)> {
        let mut ranges = Vec::new();
        let mut arg_start = start;
        let mut i = start;
        while i < end {
            if self.tokens[i].kind.is_punctuation(PunctuationId::Comma) {
                ranges.push((arg_start, i));
                arg_start = i + 1;
                i += 1;
            } else {
                i = self.past_group(i);
            }
        }
        ranges.push((arg_start, end));
        // Empty ranges come from trailing commas.
        ranges.retain(|(s, e)| s < e);
        ranges
    }

    /// Build an [`Argument`] for tokens `start..end`.
    fn argument(&mut self, start: usize, end: usize) -> Argument {
        let span = self.tokens[start].span.merge(self.tokens[end - 1].span);
        let string = match &self.tokens[start].kind {
            TokenKind::String(value) if end - start == 1 => Some(value.clone()),
            _ => None,
        };

        let function_body = self.function_body_brace(start, end).map(|open| {
            let close = end - 1;
            let content = Span::new(self.tokens[open].span.end, self.tokens[close].span.start);
            self.parse_body(open + 1, close, content)
        });

        Argument {
            span,
            string,
            function_body,
        }
    }

    /// Index of the `{` opening the argument's function body, if the argument is a function literal
    /// whose block body closes the argument.
    ///
    /// Recognized shapes: `(a) => {..}`, `a => {..}`, `async () => {..}`, `function [name](..) {..}`,
    /// `async function [name](..) {..}`.
    fn function_body_brace(&self, start: usize, end: usize) -> Option<usize> {
        let last = end - 1;
        if !self.tokens[last].kind.is_punctuation(PunctuationId::RBrace) {
            return None;
        }
        let open = self.matching.get(last).copied().flatten()?;
        if open <= start {
            return None;
        }

        let first = &self.tokens[start].kind;
        let is_function = first.is_keyword(KeywordId::Function)
            || (first.is_keyword(KeywordId::Async)
                && start + 1 < end
                && self.tokens[start + 1].kind.is_keyword(KeywordId::Function));

        let mut arrows = 0;
        let mut first_brace = None;
        let mut i = start;
        while i < end {
            let kind = &self.tokens[i].kind;
            if kind.is_punctuation(PunctuationId::FatArrow) {
                arrows += 1;
            }
            if first_brace.is_none() && kind.is_punctuation(PunctuationId::LBrace) {
                first_brace = Some(i);
            }
            i = self.past_group(i);
        }

        let arrow_body = arrows == 1 && self.tokens[open - 1].kind.is_punctuation(PunctuationId::FatArrow);
        let function_body = is_function && arrows == 0 && first_brace == Some(open);
        (arrow_body || function_body).then_some(open)
    }
}
