/// Parse a token stream into a [`SyntaxTree`].
///
/// This is the main public entrypoint for parsing.
///
/// ## Parameters
/// - `source`: Source text the tokens were lexed from; the tree keeps its own copy.
/// - `tokens`: Token stream produced by `specsplit_syntax::lexer`.
///
/// ## Errors
/// Returns `Err(Vec<CompileError>)` if parsing fails.
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(source: &str, tokens: &[Token]) -> Result<SyntaxTree, Vec<CompileError>> {
    Parser::new(source, tokens).parse()
}

/// Lex and parse `source` in one step.
///
/// ## Errors
/// Returns the lexer's errors if tokenization fails, otherwise the parser's.
pub fn parse_source(source: &str) -> Result<SyntaxTree, Vec<CompileError>> {
    let tokens = crate::lexer::lex(source)?;
    parse(source, &tokens)
}
