use log::{debug, trace};

use crate::{
    comparison::normalize::normalize_pair,
    line_diff::{classify_line, split_words_diff},
    render::render_line,
    types::{
        content_schema::Question, diff_options::DiffOptions, field_diff::FieldDiff,
        field_value::FieldValue,
    },
    word_diff::diff_words,
};

/// Compares the two values of a field line by line.
///
/// Lines are paired by position: line `i` of `before` is always compared
/// against line `i` of `after`, and the shorter side is padded with empty
/// lines. Positions where neither side shows an addition or a removal are
/// left out unless `options.include_unchanged_lines` is set.
///
/// Returns `None` when the values cannot be compared (see `normalize_pair`)
/// or when no line position is left to show.
///
/// ```
/// use revision_diff::{DiffOptions, FieldValue, LineKind, Question, diff_field};
///
/// let diff = diff_field(
///     &Question::new("serviceName", "Service name"),
///     &FieldValue::from("line one"),
///     &FieldValue::from("line one\nline two"),
///     &DiffOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(diff.before[0].kind, LineKind::Empty);
/// assert_eq!(diff.after[0].text, "<strong>line two</strong>");
/// ```
#[must_use]
pub fn diff_field(
    question: &Question,
    before: &FieldValue,
    after: &FieldValue,
    options: &DiffOptions,
) -> Option<FieldDiff> {
    let (before_lines, after_lines) = match normalize_pair(before, after) {
        Ok(lines) => lines,
        Err(error) => {
            debug!("Leaving field '{}' out of the comparison: {error}", question.id);
            return None;
        }
    };

    let line_count = before_lines.len().max(after_lines.len());
    trace!(
        "Comparing field '{}': {} line(s) before, {} line(s) after",
        question.id,
        before_lines.len(),
        after_lines.len()
    );

    let mut before_rows = Vec::new();
    let mut after_rows = Vec::new();

    for index in 0..line_count {
        let before_line = before_lines.get(index).map_or("", String::as_str);
        let after_line = after_lines.get(index).map_or("", String::as_str);

        let tokens = diff_words(before_line, after_line);
        let (before_tokens, after_tokens) = split_words_diff(&tokens);
        let before_kind = classify_line(&before_tokens);
        let after_kind = classify_line(&after_tokens);

        if !options.include_unchanged_lines && !before_kind.is_change() && !after_kind.is_change() {
            continue;
        }

        let line_number = index + 1;
        before_rows.push(render_line(&before_tokens, line_number, before_kind));
        after_rows.push(render_line(&after_tokens, line_number, after_kind));
    }

    if before_rows.is_empty() {
        debug!("Field '{}' has no visible changes", question.id);
        return None;
    }

    Some(FieldDiff {
        section_label: None,
        field_id: question.id.clone(),
        field_label: question.label.clone(),
        before: before_rows,
        after: after_rows,
    })
}
