#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::line_kind::LineKind;

/// One side of one line position, ready to be embedded in a two-column
/// diff table. `text` is already escaped, with the changed words wrapped in
/// `<strong>`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLineRow {
    pub line_number: usize,
    pub kind: LineKind,
    pub text: String,
}

impl RenderedLineRow {
    /// The line number cell followed by the content cell, both tagged with
    /// the line's kind.
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<td class='number line-number {kind}'>{line_number}</td><td class='{kind}'>{text}</td>",
            kind = self.kind,
            line_number = self.line_number,
            text = self.text,
        )
    }
}
