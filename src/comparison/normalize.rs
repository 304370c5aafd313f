use crate::{errors::NormalizeError, types::field_value::FieldValue, utils::side::Side};

/// Turns the two values of a field into the lines they are compared by.
/// Both values have to be text or both have to be lists.
///
/// # Errors
///
/// Returns `NormalizeError::Unsupported` when either value is neither text
/// nor a list of text, and `NormalizeError::ShapeMismatch` when one is text
/// and the other a list.
pub fn normalize_pair(
    before: &FieldValue,
    after: &FieldValue,
) -> Result<(Vec<String>, Vec<String>), NormalizeError> {
    match (before.lines(), after.lines()) {
        (None, _) => Err(NormalizeError::Unsupported { side: Side::Before }),
        (_, None) => Err(NormalizeError::Unsupported { side: Side::After }),
        (Some(before_lines), Some(after_lines))
            if std::mem::discriminant(before) == std::mem::discriminant(after) =>
        {
            Ok((before_lines, after_lines))
        }
        _ => Err(NormalizeError::ShapeMismatch {
            before: before.shape(),
            after: after.shape(),
        }),
    }
}
