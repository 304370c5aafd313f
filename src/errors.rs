use thiserror::Error;

use crate::{types::revision_id::RevisionId, utils::side::Side};

/// Reasons why the values of a field cannot be compared line by line. These
/// never abort a comparison: the offending field is left out of the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("Cannot compare a {before} value with a {after} value")]
    ShapeMismatch {
        before: &'static str,
        after: &'static str,
    },

    #[error("The {side} value is neither text nor a list of text")]
    Unsupported { side: Side },
}

/// Error type for comparing revisions fetched from a `RevisionStore`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RevisionDiffError {
    #[error("Referenced revision {id} does not exist")]
    RevisionNotFound { id: RevisionId },
}

/// Error type for loading a `ContentSchema` manifest
#[cfg(feature = "yaml")]
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse content schema: {0}")]
    Parse(#[from] serde_yaml::Error),
}
