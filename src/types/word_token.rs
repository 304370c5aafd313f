#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::line_kind::LineKind;

/// What the word differ decided about a single word.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Unchanged,
    Addition,
    Removal,
    /// Character level hint describing how a removed word turned into the
    /// added word next to it. Never rendered.
    Detail,
}

impl TokenKind {
    /// The line kind a line takes on when this token dominates it.
    #[must_use]
    pub fn line_kind(self) -> Option<LineKind> {
        match self {
            TokenKind::Addition => Some(LineKind::Addition),
            TokenKind::Removal => Some(LineKind::Removal),
            TokenKind::Unchanged | TokenKind::Detail => None,
        }
    }

    /// The marker `difflib`-style context diffs prefix lines with.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            TokenKind::Unchanged => "  ",
            TokenKind::Addition => "+ ",
            TokenKind::Removal => "- ",
            TokenKind::Detail => "? ",
        }
    }
}

/// A classified word. For `Detail` tokens `text` holds the hint line
/// instead of a word.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordToken {
    pub text: String,
    pub kind: TokenKind,
}

impl WordToken {
    #[must_use]
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        WordToken {
            text: text.into(),
            kind,
        }
    }

    #[must_use]
    pub fn unchanged(text: impl Into<String>) -> Self { Self::new(text, TokenKind::Unchanged) }

    #[must_use]
    pub fn addition(text: impl Into<String>) -> Self { Self::new(text, TokenKind::Addition) }

    #[must_use]
    pub fn removal(text: impl Into<String>) -> Self { Self::new(text, TokenKind::Removal) }

    #[must_use]
    pub fn detail(text: impl Into<String>) -> Self { Self::new(text, TokenKind::Detail) }
}

impl std::fmt::Display for WordToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind.marker(), self.text)
    }
}
