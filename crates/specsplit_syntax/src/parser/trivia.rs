/// Trailing trivia ownership.
///
/// A statement owns the comments that follow it on the same line (`it('a', fn); // flaky`), so
/// removing the statement removes its annotations too. Line breaks and everything after them belong
/// to the next sibling's leading trivia.

/// End of the trailing same-line comments after byte `from`, never past `limit`.
///
/// Spaces and tabs are absorbed only when a comment follows them.
fn trailing_comment_end(source: &str, from: usize, limit: usize) -> usize {
    let bytes = source.as_bytes();
    let mut end = from;
    let mut i = from;

    loop {
        while i < limit && (bytes[i] == b' ' || bytes[i] == b'\t') {
            i += 1;
        }
        let rest = &source[i..limit];

        if rest.starts_with("//") {
            return rest.find('\n').map_or(limit, |offset| i + offset);
        }

        if rest.starts_with("/*") {
            match rest[2..].find("*/") {
                Some(offset) => {
                    let close = i + 2 + offset + 2;
                    if source[i..close].contains('\n') {
                        return end;
                    }
                    end = close;
                    i = close;
                    continue;
                }
                None => return end,
            }
        }

        return end;
    }
}
