#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs of a revision comparison.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Keep lines that are identical in both revisions. Off by default, in
    /// which case only lines showing an addition or a removal are rendered.
    pub include_unchanged_lines: bool,
}

impl DiffOptions {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_include_unchanged_lines(mut self, include_unchanged_lines: bool) -> Self {
        self.include_unchanged_lines = include_unchanged_lines;
        self
    }
}
