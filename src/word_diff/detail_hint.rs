use crate::raw_operation::RawOperation;

/// Two words at least this similar are shown as an edit of one another,
/// with detail hints, instead of an unrelated removal and addition.
pub const SIMILARITY_CUTOFF: f64 = 0.75;

/// Similarity of two words in the `[0, 1]` range: twice the number of
/// matching characters over the total number of characters.
///
/// ```
/// use revision_diff::similarity_ratio;
///
/// assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
/// assert_eq!(similarity_ratio("", ""), 1.0);
/// ```
#[must_use]
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    chars_similarity_ratio(&a, &b)
}

#[allow(clippy::cast_precision_loss)]
pub fn chars_similarity_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let matches: usize = RawOperation::vec_from(a, b)
        .iter()
        .filter_map(|operation| match operation {
            RawOperation::Equal(chars) => Some(chars.len()),
            RawOperation::Insert(_) | RawOperation::Delete(_) => None,
        })
        .sum();

    2.0 * matches as f64 / total as f64
}

/// Character level hint lines for a word that got replaced by a similar
/// word: ` ` under kept characters, `-` under deleted ones, `+` under
/// inserted ones and `^` under replaced ones. Trailing spaces are trimmed,
/// so a side without changes gets an empty hint.
///
/// ```not_rust
/// ("there", "there!") -> ("", "     +")
/// ("colour", "color") -> ("    -", "")
/// ```
pub fn detail_hints(old: &str, new: &str) -> (String, String) {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();

    let mut old_hint = String::with_capacity(old.len());
    let mut new_hint = String::with_capacity(new.len());

    let mut operations = RawOperation::vec_from(&old, &new).into_iter().peekable();
    while let Some(operation) = operations.next() {
        match operation {
            RawOperation::Equal(chars) => {
                old_hint.extend(std::iter::repeat_n(' ', chars.len()));
                new_hint.extend(std::iter::repeat_n(' ', chars.len()));
            }
            RawOperation::Delete(deleted) => {
                if let Some(RawOperation::Insert(inserted)) =
                    operations.next_if(|next| matches!(next, RawOperation::Insert(_)))
                {
                    old_hint.extend(std::iter::repeat_n('^', deleted.len()));
                    new_hint.extend(std::iter::repeat_n('^', inserted.len()));
                } else {
                    old_hint.extend(std::iter::repeat_n('-', deleted.len()));
                }
            }
            RawOperation::Insert(inserted) => {
                new_hint.extend(std::iter::repeat_n('+', inserted.len()));
            }
        }
    }

    (
        old_hint.trim_end().to_owned(),
        new_hint.trim_end().to_owned(),
    )
}
