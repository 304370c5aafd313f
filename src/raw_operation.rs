use std::fmt::Debug;

use crate::utils::myers_diff::myers_diff;

/// An edit script step holding the items it covers.
///
/// `myers_diff` produces one operation per item; `group_operations` then
/// joins them into runs.
#[derive(Debug, Clone, PartialEq)]
pub enum RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    Insert(Vec<T>),
    Delete(Vec<T>),
    Equal(Vec<T>),
}

impl<T> RawOperation<T>
where
    T: PartialEq + Clone + Debug,
{
    /// Diff two sequences and group the result into runs.
    pub fn vec_from(old: &[T], new: &[T]) -> Vec<Self> { group_operations(myers_diff(old, new)) }

    pub fn items(&self) -> &Vec<T> {
        match self {
            RawOperation::Insert(items) | RawOperation::Delete(items) | RawOperation::Equal(items) => {
                items
            }
        }
    }

    /// Extends the operation with another operation. Only operations of the
    /// same type as self can be used to extend self, otherwise the function
    /// will panic.
    pub fn join(self, other: RawOperation<T>) -> RawOperation<T> {
        debug_assert!(
            std::mem::discriminant(&self) == std::mem::discriminant(&other),
            "Cannot join operations of different types"
        );

        match (self, other) {
            (RawOperation::Insert(left), RawOperation::Insert(right)) => {
                RawOperation::Insert(left.into_iter().chain(right).collect())
            }
            (RawOperation::Delete(left), RawOperation::Delete(right)) => {
                RawOperation::Delete(left.into_iter().chain(right).collect())
            }
            (RawOperation::Equal(left), RawOperation::Equal(right)) => {
                RawOperation::Equal(left.into_iter().chain(right).collect())
            }
            _ => unreachable!("Only operations of the same type can be joined"),
        }
    }
}

/// Joins adjacent operations into runs. Inserts and deletes between two
/// equal runs can be interleaved, such as `IDID`; they are collected into a
/// single delete run followed by a single insert run.
pub fn group_operations<I, T>(raw_operations: I) -> Vec<RawOperation<T>>
where
    I: IntoIterator<Item = RawOperation<T>>,
    T: PartialEq + Clone + Debug,
{
    let mut result: Vec<RawOperation<T>> = Vec::new();
    let mut pending_delete: Option<RawOperation<T>> = None;
    let mut pending_insert: Option<RawOperation<T>> = None;

    for next in raw_operations {
        match next {
            RawOperation::Delete(..) => {
                pending_delete = Some(match pending_delete.take() {
                    Some(previous) => previous.join(next),
                    None => next,
                });
            }
            RawOperation::Insert(..) => {
                pending_insert = Some(match pending_insert.take() {
                    Some(previous) => previous.join(next),
                    None => next,
                });
            }
            RawOperation::Equal(..) => {
                result.extend(pending_delete.take());
                result.extend(pending_insert.take());

                match result.pop() {
                    Some(previous @ RawOperation::Equal(..)) => result.push(previous.join(next)),
                    Some(previous) => {
                        result.push(previous);
                        result.push(next);
                    }
                    None => result.push(next),
                }
            }
        }
    }

    result.extend(pending_delete);
    result.extend(pending_insert);

    result
}
