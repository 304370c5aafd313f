use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::{field_value::FieldValue, revision_id::RevisionId};

/// A timestamped snapshot of a record's field values.
///
/// When (de)serialized, the fields sit next to `id` and `updatedAt` in a
/// single flat object, the way the backend API serves records.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Revision {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub id: Option<RevisionId>,

    /// Only used for display by callers.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub updated_at: Option<String>,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Revision {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<RevisionId>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, field_id: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field_id.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, field_id: &str) -> Option<&FieldValue> { self.fields.get(field_id) }
}

impl<K, V> FromIterator<(K, V)> for Revision
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Revision {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
            ..Revision::default()
        }
    }
}
