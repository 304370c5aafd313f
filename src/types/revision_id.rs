use std::{borrow::Cow, fmt::Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a revision. The backend API hands out numeric ids for
/// archived snapshots and textual ids for live records.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RevisionId {
    Number(i64),
    Text(String),
}

impl Display for RevisionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevisionId::Number(number) => write!(f, "{number}"),
            RevisionId::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for RevisionId {
    fn from(value: i64) -> Self { RevisionId::Number(value) }
}

impl From<String> for RevisionId {
    fn from(value: String) -> Self { RevisionId::Text(value) }
}

impl From<&str> for RevisionId {
    fn from(value: &str) -> Self { RevisionId::Text(value.to_owned()) }
}

impl<'a> From<Cow<'a, str>> for RevisionId {
    fn from(value: Cow<'a, str>) -> Self { RevisionId::Text(value.into_owned()) }
}
