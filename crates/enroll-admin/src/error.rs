//! Admin-level error types.

use enroll_client::ClientError;
use enroll_model::Resource;
use thiserror::Error;

/// Local validation failures. The `Display` text is the prompt shown to the
/// operator; no network call is made when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please select both a student and a course.")]
    MissingSelection,

    #[error("{field} must be a whole number (got {value:?})")]
    NotANumber {
        /// Form field that failed coercion.
        field: &'static str,
        /// Raw text that was entered.
        value: String,
    },
}

/// Errors surfaced by shell operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AdminError {
    /// The form rejected the submission before any request was sent.
    #[error(transparent)]
    Validation(#[from] FormError),

    /// A create, update or delete call failed; the refresh was skipped.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An edit trigger named a row that is not in the current snapshot.
    #[error("no {} with id {id} in the current view", .resource.singular().to_lowercase())]
    RowNotFound {
        /// Collection that was searched.
        resource: Resource,
        /// Identifier that was requested.
        id: i64,
    },
}

impl AdminError {
    /// True for failures caught locally, before any network activity.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::RowNotFound { .. })
    }
}
