use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Classification of one side of one line position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The side has no words at this position.
    Empty,
    Addition,
    Removal,
    Unchanged,
}

impl LineKind {
    /// The CSS class used for styling rows of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::Empty => "empty",
            LineKind::Addition => "addition",
            LineKind::Removal => "removal",
            LineKind::Unchanged => "unchanged",
        }
    }

    /// Whether the line shows an addition or a removal.
    #[must_use]
    pub fn is_change(self) -> bool { matches!(self, LineKind::Addition | LineKind::Removal) }
}

impl Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}
