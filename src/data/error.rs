//! Error types for group validation and store mutation.

use thiserror::Error;

/// Errors returned by [`GroupFactory`](super::GroupFactory) and
/// [`GroupStore`](super::GroupStore).
///
/// All variants are local validation failures. None of them are fatal and
/// retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The group name is empty or contains only whitespace.
    #[error("Group name must not be empty")]
    InvalidName,

    /// The icon tag is not one of the known icons.
    #[error("Unknown icon: {0}")]
    InvalidIcon(String),

    /// The refresh interval is not one of the allowed values.
    #[error("Refresh interval must be 30, 60, 300 or 900 seconds (got {0})")]
    InvalidInterval(String),

    /// A group with this id already exists in the store.
    #[error("A group with id '{0}' already exists")]
    DuplicateId(String),

    /// No group with this id exists in the store.
    #[error("No group with id '{0}'")]
    NotFound(String),
}
