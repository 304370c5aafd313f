use crate::types::{
    line_kind::LineKind,
    word_token::{TokenKind, WordToken},
};

/// Splits the combined word diff of a line position into what the "before"
/// and the "after" column show. Unchanged words go to both sides, removals
/// to the before side, additions to the after side and detail hints are
/// dropped.
///
/// ```not_rust
/// ["  Hi", "- there", "+ there!", "?      +"] -> (["  Hi", "- there"], ["  Hi", "+ there!"])
/// ```
#[must_use]
pub fn split_words_diff(tokens: &[WordToken]) -> (Vec<WordToken>, Vec<WordToken>) {
    let mut before = Vec::with_capacity(tokens.len());
    let mut after = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind {
            TokenKind::Unchanged => {
                before.push(token.clone());
                after.push(token.clone());
            }
            TokenKind::Removal => before.push(token.clone()),
            TokenKind::Addition => after.push(token.clone()),
            TokenKind::Detail => {}
        }
    }

    (before, after)
}

/// The kind of one side of a line position: the kind of its first added or
/// removed word, `Unchanged` when there is none and `Empty` when the side
/// has no words at all.
#[must_use]
pub fn classify_line(tokens: &[WordToken]) -> LineKind {
    if tokens.is_empty() {
        return LineKind::Empty;
    }

    tokens
        .iter()
        .find_map(|token| token.kind.line_kind())
        .unwrap_or(LineKind::Unchanged)
}
