use std::ops::Range;

use log::trace;

use crate::word_diff::detail_hint::{SIMILARITY_CUTOFF, chars_similarity_ratio};

/// The pairs of a replace block's removed and added words that are similar
/// enough to be shown as an edit of one another, most similar first.
///
/// Built once per replace block so that splitting the block around its best
/// pair never compares the same two words twice.
#[derive(Debug)]
pub struct SimilarityMatrix {
    /// Ties keep the order in which the pairs were visited: added word
    /// first, then removed word.
    candidates: Vec<Candidate>,
    full_comparisons: usize,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    removed: usize,
    added: usize,
    ratio: f64,
}

/// A word's characters, once in order and once sorted for multiset
/// intersection.
struct WordChars {
    chars: Vec<char>,
    sorted: Vec<char>,
}

impl WordChars {
    fn new(word: &str) -> Self {
        let chars: Vec<char> = word.chars().collect();
        let mut sorted = chars.clone();
        sorted.sort_unstable();
        WordChars { chars, sorted }
    }

    /// Upper bound of the similarity ratio from the word lengths alone.
    #[allow(clippy::cast_precision_loss)]
    fn real_quick_ratio(&self, other: &WordChars) -> f64 {
        let total = self.chars.len() + other.chars.len();
        if total == 0 {
            return 1.0;
        }

        2.0 * self.chars.len().min(other.chars.len()) as f64 / total as f64
    }

    /// Upper bound of the similarity ratio from the characters the words
    /// share, ignoring their order.
    #[allow(clippy::cast_precision_loss)]
    fn quick_ratio(&self, other: &WordChars) -> f64 {
        let total = self.chars.len() + other.chars.len();
        if total == 0 {
            return 1.0;
        }

        let mut shared: u32 = 0;
        let (mut i, mut j) = (0, 0);
        while i < self.sorted.len() && j < other.sorted.len() {
            match self.sorted[i].cmp(&other.sorted[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    shared += 1;
                    i += 1;
                    j += 1;
                }
            }
        }

        2.0 * f64::from(shared) / total as f64
    }
}

impl SimilarityMatrix {
    pub fn new(removed: &[&str], added: &[&str]) -> Self {
        let removed_chars: Vec<WordChars> = removed.iter().map(|word| WordChars::new(word)).collect();
        let added_chars: Vec<WordChars> = added.iter().map(|word| WordChars::new(word)).collect();

        let mut candidates = Vec::new();
        let mut full_comparisons = 0;

        for (j, new) in added_chars.iter().enumerate() {
            for (i, old) in removed_chars.iter().enumerate() {
                if old.real_quick_ratio(new) < SIMILARITY_CUTOFF
                    || old.quick_ratio(new) < SIMILARITY_CUTOFF
                {
                    continue;
                }

                full_comparisons += 1;
                let ratio = chars_similarity_ratio(&old.chars, &new.chars);
                if ratio >= SIMILARITY_CUTOFF {
                    candidates.push(Candidate {
                        removed: i,
                        added: j,
                        ratio,
                    });
                }
            }
        }

        // Stable, so equally similar pairs stay in visiting order.
        candidates.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

        trace!(
            "Compared {full_comparisons} of {} word pairs in full, {} similar",
            removed.len() * added.len(),
            candidates.len()
        );

        SimilarityMatrix {
            candidates,
            full_comparisons,
        }
    }

    /// The most similar pair with the removed word in `removed` and the added
    /// word in `added`. Ties go to the earliest added word, then to the
    /// earliest removed word.
    pub fn best_pair(&self, removed: &Range<usize>, added: &Range<usize>) -> Option<(usize, usize)> {
        self.candidates
            .iter()
            .find(|candidate| removed.contains(&candidate.removed) && added.contains(&candidate.added))
            .map(|candidate| (candidate.removed, candidate.added))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_best_pair() {
        let matrix = SimilarityMatrix::new(&["colour"], &["cool", "colours"]);

        assert_eq!(matrix.best_pair(&(0..1), &(0..2)), Some((0, 1)));
        assert_eq!(matrix.best_pair(&(0..1), &(0..1)), None);
        assert_eq!(matrix.best_pair(&(0..0), &(0..2)), None);
    }

    #[test]
    fn test_ties_go_to_the_earliest_pair() {
        let matrix = SimilarityMatrix::new(&["Dr", "Brady"], &["Dr.", "Brody"]);

        assert_eq!(matrix.best_pair(&(0..2), &(0..2)), Some((0, 0)));
        assert_eq!(matrix.best_pair(&(1..2), &(1..2)), Some((1, 1)));
    }

    #[test]
    fn test_dissimilar_words_skip_the_full_comparison() {
        let removed: Vec<String> = (0..400).map(|i| format!("word{i}")).collect();
        let added: Vec<String> = (0..400).map(|i| format!("wxrd{i}z")).collect();
        let removed: Vec<&str> = removed.iter().map(String::as_str).collect();
        let added: Vec<&str> = added.iter().map(String::as_str).collect();

        let matrix = SimilarityMatrix::new(&removed, &added);

        // Only words whose numbers share the same digits get past the
        // character count bound.
        assert!(matrix.full_comparisons <= 400 * 6, "{}", matrix.full_comparisons);
        assert_eq!(matrix.candidates.len(), 390);
    }

    #[test]
    fn test_upper_bounds() {
        let old = WordChars::new("Brady");
        let new = WordChars::new("Brody");

        assert!((old.real_quick_ratio(&new) - 1.0).abs() < f64::EPSILON);
        assert!((old.quick_ratio(&new) - 0.8).abs() < f64::EPSILON);
        assert!(old.quick_ratio(&WordChars::new("ydarB")) >= 1.0);
    }
}
