use log::debug;

use crate::{
    comparison::field::diff_field,
    types::{
        content_schema::Section, diff_options::DiffOptions, field_diff::FieldDiff,
        revision::Revision,
    },
};

/// Compares two revisions of a record field by field, in the order the
/// sections and their questions are listed.
///
/// A field missing from one revision is compared against an empty value of
/// the other revision's shape; a field missing from both is skipped. Fields
/// without an added or removed line, or with values that cannot be compared,
/// are not part of the output, so identical revisions yield an empty list
/// even when `options.include_unchanged_lines` is set. That option only
/// decides whether the unchanged lines of a changed field are shown.
///
/// ```
/// use revision_diff::{DiffOptions, Revision, Section, diff_revisions};
///
/// let sections = vec![Section::new("Description").with_question("serviceName", "Service name")];
/// let before = Revision::new().with_field("serviceName", "Metempsychosis");
/// let after = Revision::new().with_field("serviceName", "Metempsychosis!");
///
/// let diffs = diff_revisions(&sections, &before, &after, &DiffOptions::default());
/// assert_eq!(diffs.len(), 1);
/// assert_eq!(diffs[0].section_label.as_deref(), Some("Description"));
/// ```
#[must_use]
pub fn diff_revisions(
    sections: &[Section],
    before: &Revision,
    after: &Revision,
    options: &DiffOptions,
) -> Vec<FieldDiff> {
    let mut diffs = Vec::new();

    for section in sections {
        for question in &section.questions {
            let empty;
            let (before_value, after_value) =
                match (before.get(&question.id), after.get(&question.id)) {
                    (None, None) => {
                        debug!("Field '{}' is missing from both revisions", question.id);
                        continue;
                    }
                    (Some(before_value), None) => {
                        empty = before_value.empty_like();
                        (before_value, &empty)
                    }
                    (None, Some(after_value)) => {
                        empty = after_value.empty_like();
                        (&empty, after_value)
                    }
                    (Some(before_value), Some(after_value)) => (before_value, after_value),
                };

            match diff_field(question, before_value, after_value, options) {
                Some(diff) if diff.has_changes() => {
                    diffs.push(diff.with_section_label(section.label.clone()));
                }
                Some(_) => debug!("Field '{}' has no visible changes", question.id),
                None => {}
            }
        }
    }

    diffs
}
