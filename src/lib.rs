//! Word-level, line-by-line comparison of two revisions of a record, rendered
//! into rows for a two-column "before/after" diff table.

mod comparison;
mod errors;
mod line_diff;
mod raw_operation;
mod render;
mod revision_store;
mod tokenizer;
mod types;
mod utils;
mod word_diff;

pub use comparison::{field::diff_field, normalize::normalize_pair, sections::diff_revisions};
#[cfg(feature = "yaml")]
pub use errors::SchemaError;
pub use errors::{NormalizeError, RevisionDiffError};
pub use line_diff::{classify_line, split_words_diff};
pub use render::render_line;
pub use revision_store::{InMemoryRevisionStore, RevisionStore, compare_revisions};
pub use tokenizer::{line_tokenizer::line_tokenizer, word_tokenizer::word_tokenizer};
pub use types::{
    content_schema::{ContentSchema, Question, Section},
    diff_options::DiffOptions,
    field_diff::FieldDiff,
    field_value::FieldValue,
    line_kind::LineKind,
    rendered_line_row::RenderedLineRow,
    revision::Revision,
    revision_id::RevisionId,
    word_token::{TokenKind, WordToken},
};
pub use utils::{escape_html::escape_html, side::Side};
pub use word_diff::{detail_hint::similarity_ratio, diff_words};
