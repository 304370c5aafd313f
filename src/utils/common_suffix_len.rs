use core::ops::{Index, Range};

/// Given two lookups and ranges calculates the length of the common suffix.
/// Copied from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_suffix_len<Old, New>(
    old: &Old,
    old_range: Range<usize>,
    new: &New,
    new_range: Range<usize>,
) -> usize
where
    Old: Index<usize> + ?Sized,
    New: Index<usize> + ?Sized,
    New::Output: PartialEq<Old::Output>,
{
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|x| new[x.0] == old[x.1])
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_common_suffix_len_of_words() {
        let old = ["line", "number", "one", "has", "changed"];
        let new = ["line", "one", "has", "actually", "changed"];

        assert_eq!(common_suffix_len(&old[..], 0..5, &new[..], 0..5), 1);
        assert_eq!(common_suffix_len(&old[..], 0..4, &new[..], 0..3), 2);
        assert_eq!(common_suffix_len(&old[..], 0..0, &new[..], 0..5), 0);
    }

    #[test]
    fn test_common_suffix_len_of_bytes() {
        assert_eq!(
            common_suffix_len("".as_bytes(), 0..0, "".as_bytes(), 0..0),
            0
        );
        assert_eq!(
            common_suffix_len("there".as_bytes(), 0..5, "over there".as_bytes(), 0..10),
            5
        );
        assert_eq!(
            common_suffix_len("there".as_bytes(), 0..5, "there!".as_bytes(), 0..6),
            0
        );
    }
}
