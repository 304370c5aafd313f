pub mod detail_hint;
pub mod similarity_matrix;

use std::ops::Range;

use detail_hint::detail_hints;
use similarity_matrix::SimilarityMatrix;

use crate::{
    raw_operation::RawOperation,
    tokenizer::word_tokenizer::word_tokenizer,
    types::word_token::WordToken,
};

/// Compares two lines word by word and returns the classified words of both
/// lines combined, in display order.
///
/// Words present in both lines are `Unchanged`, words only in `line_a` are
/// `Removal`s and words only in `line_b` are `Addition`s. Where a removed
/// word was replaced by a similar one, the pair is followed by `Detail`
/// tokens describing the character level change.
///
/// ```
/// use revision_diff::{WordToken, diff_words};
///
/// assert_eq!(
///     diff_words("Hi there", "Hi there!"),
///     vec![
///         WordToken::unchanged("Hi"),
///         WordToken::removal("there"),
///         WordToken::addition("there!"),
///         WordToken::detail("     +"),
///     ]
/// );
/// ```
#[must_use]
pub fn diff_words(line_a: &str, line_b: &str) -> Vec<WordToken> {
    let old = word_tokenizer(line_a);
    let new = word_tokenizer(line_b);

    let mut tokens = Vec::with_capacity(old.len().max(new.len()));
    let mut removed: Vec<&str> = Vec::new();
    let mut added: Vec<&str> = Vec::new();

    for operation in RawOperation::vec_from(&old, &new) {
        match operation {
            RawOperation::Delete(words) => removed.extend(words),
            RawOperation::Insert(words) => added.extend(words),
            RawOperation::Equal(words) => {
                replace_words(&removed, &added, &mut tokens);
                removed.clear();
                added.clear();

                tokens.extend(words.into_iter().map(WordToken::unchanged));
            }
        }
    }

    replace_words(&removed, &added, &mut tokens);

    tokens
}

/// Emits a block of removed words that got replaced by a block of added
/// words. The most similar pair above the cutoff is shown as an edit and the
/// words before and after it are handled recursively; without such a pair
/// the removals are listed before the additions.
fn replace_words(removed: &[&str], added: &[&str], tokens: &mut Vec<WordToken>) {
    if removed.is_empty() || added.is_empty() {
        tokens.extend(removed.iter().copied().map(WordToken::removal));
        tokens.extend(added.iter().copied().map(WordToken::addition));
        return;
    }

    let matrix = SimilarityMatrix::new(removed, added);
    replace_range(
        removed,
        0..removed.len(),
        added,
        0..added.len(),
        &matrix,
        tokens,
    );
}

fn replace_range(
    removed: &[&str],
    removed_range: Range<usize>,
    added: &[&str],
    added_range: Range<usize>,
    matrix: &SimilarityMatrix,
    tokens: &mut Vec<WordToken>,
) {
    let Some((i, j)) = matrix.best_pair(&removed_range, &added_range) else {
        tokens.extend(removed[removed_range].iter().copied().map(WordToken::removal));
        tokens.extend(added[added_range].iter().copied().map(WordToken::addition));
        return;
    };

    replace_range(
        removed,
        removed_range.start..i,
        added,
        added_range.start..j,
        matrix,
        tokens,
    );
    edit_word(removed[i], added[j], tokens);
    replace_range(
        removed,
        i + 1..removed_range.end,
        added,
        j + 1..added_range.end,
        matrix,
        tokens,
    );
}

fn edit_word(old: &str, new: &str, tokens: &mut Vec<WordToken>) {
    if old == new {
        tokens.push(WordToken::unchanged(old));
        return;
    }

    let (old_hint, new_hint) = detail_hints(old, new);

    tokens.push(WordToken::removal(old));
    if !old_hint.is_empty() {
        tokens.push(WordToken::detail(old_hint));
    }

    tokens.push(WordToken::addition(new));
    if !new_hint.is_empty() {
        tokens.push(WordToken::detail(new_hint));
    }
}
