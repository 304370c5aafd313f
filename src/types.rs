pub mod content_schema;
pub mod diff_options;
pub mod field_diff;
pub mod field_value;
pub mod line_kind;
pub mod rendered_line_row;
pub mod revision;
pub mod revision_id;
pub mod word_token;
