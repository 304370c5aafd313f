#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::rendered_line_row::RenderedLineRow;

/// The rendered comparison of a single field. `before` and `after` always
/// have the same length; the rows at the same index describe the same line
/// position.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub section_label: Option<String>,
    pub field_id: String,
    pub field_label: String,
    pub before: Vec<RenderedLineRow>,
    pub after: Vec<RenderedLineRow>,
}

impl FieldDiff {
    #[must_use]
    pub fn with_section_label(mut self, section_label: impl Into<String>) -> Self {
        self.section_label = Some(section_label.into());
        self
    }

    /// Before and after rows paired up by line position.
    pub fn rows(&self) -> impl Iterator<Item = (&RenderedLineRow, &RenderedLineRow)> {
        self.before.iter().zip(self.after.iter())
    }

    /// One `<tr>` per line position, the "before" cells first.
    pub fn to_html_rows(&self) -> impl Iterator<Item = String> {
        self.rows()
            .map(|(before, after)| format!("<tr>{}{}</tr>", before.to_html(), after.to_html()))
    }

    /// Whether any line position shows an addition or a removal.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.rows()
            .any(|(before, after)| before.kind.is_change() || after.kind.is_change())
    }

    #[must_use]
    pub fn len(&self) -> usize { self.before.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.before.is_empty() }
}
