/// Bracket matching pre-pass.
///
/// Pairs every `(`/`[`/`{` with its closer before statement parsing starts, so the statement
/// parser can skip whole groups in one step and never has to recover from unbalanced input.

/// Pair up delimiters, returning the partner index for each bracket token.
///
/// ## Errors
/// - A closer whose opener is a different bracket (stops at the first such mismatch).
/// - A closer with no opener.
/// - Openers left unclosed at end of input.
fn match_delimiters(tokens: &[Token]) -> Result<Vec<Option<usize>>, Vec<CompileError>> {
    let mut matching = vec![None; tokens.len()];
    let mut stack: Vec<(usize, PunctuationId)> = Vec::new();

    for (index, token) in tokens.iter().enumerate() {
        let Some(id) = token.punctuation_id() else {
            continue;
        };

        if punctuation::closing(id).is_some() {
            stack.push((index, id));
            continue;
        }
        if !punctuation::is_closing(id) {
            continue;
        }

        match stack.pop() {
            Some((open, open_id)) if punctuation::closing(open_id) == Some(id) => {
                matching[open] = Some(index);
                matching[index] = Some(open);
            }
            Some((open, open_id)) => {
                let expected = punctuation::closing(open_id).map_or("?", punctuation::as_str);
                let error = CompileError::syntax(
                    format!("Mismatched `{}`: expected `{}`", punctuation::as_str(id), expected),
                    token.span,
                )
                .with_note(format!(
                    "`{}` opened at byte {}",
                    punctuation::as_str(open_id),
                    tokens[open].span.start
                ));
                return Err(vec![error]);
            }
            None => {
                let error = CompileError::syntax(
                    format!("Unexpected closing `{}`", punctuation::as_str(id)),
                    token.span,
                );
                return Err(vec![error]);
            }
        }
    }

    if stack.is_empty() {
        return Ok(matching);
    }

    Err(stack
        .into_iter()
        .map(|(open, open_id)| {
            let closer = punctuation::closing(open_id).map_or("?", punctuation::as_str);
            CompileError::syntax(
                format!("Unclosed `{}`", punctuation::as_str(open_id)),
                tokens[open].span,
            )
            .with_hint(format!("Add a closing `{}`", closer))
        })
        .collect())
}
