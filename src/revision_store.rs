use std::collections::HashMap;

use log::info;

use crate::{
    comparison::sections::diff_revisions,
    errors::RevisionDiffError,
    types::{
        content_schema::ContentSchema, diff_options::DiffOptions, field_diff::FieldDiff,
        revision::Revision, revision_id::RevisionId,
    },
};

/// Source of revision snapshots, typically backed by the data API.
pub trait RevisionStore {
    fn revision(&self, id: &RevisionId) -> Option<Revision>;
}

/// A `RevisionStore` holding its revisions in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRevisionStore {
    revisions: HashMap<RevisionId, Revision>,
}

impl InMemoryRevisionStore {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Stores `revision` under `id`, replacing any earlier revision with the
    /// same id.
    pub fn insert(&mut self, id: impl Into<RevisionId>, revision: Revision) {
        self.revisions.insert(id.into(), revision);
    }

    #[must_use]
    pub fn len(&self) -> usize { self.revisions.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.revisions.is_empty() }
}

impl RevisionStore for InMemoryRevisionStore {
    fn revision(&self, id: &RevisionId) -> Option<Revision> { self.revisions.get(id).cloned() }
}

impl FromIterator<Revision> for InMemoryRevisionStore {
    /// Revisions without an id are dropped.
    fn from_iter<I: IntoIterator<Item = Revision>>(iter: I) -> Self {
        InMemoryRevisionStore {
            revisions: iter
                .into_iter()
                .filter_map(|revision| Some((revision.id.clone()?, revision)))
                .collect(),
        }
    }
}

/// Fetches two revisions from `store` and compares them along `schema`.
///
/// # Errors
///
/// Returns `RevisionDiffError::RevisionNotFound` if either id is unknown to
/// the store.
pub fn compare_revisions<S>(
    store: &S,
    schema: &ContentSchema,
    before_id: &RevisionId,
    after_id: &RevisionId,
    options: &DiffOptions,
) -> Result<Vec<FieldDiff>, RevisionDiffError>
where
    S: RevisionStore + ?Sized,
{
    let before = store
        .revision(before_id)
        .ok_or_else(|| RevisionDiffError::RevisionNotFound {
            id: before_id.clone(),
        })?;
    let after = store
        .revision(after_id)
        .ok_or_else(|| RevisionDiffError::RevisionNotFound {
            id: after_id.clone(),
        })?;

    let diffs = diff_revisions(&schema.sections, &before, &after, options);
    info!(
        "Compared revision {before_id} with revision {after_id}: {} field(s) changed",
        diffs.len()
    );

    Ok(diffs)
}
