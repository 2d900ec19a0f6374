//! # Gateway Error
//!
//! Maps registry lookups and protocol rejections into one error type for
//! external callers. Protocol errors pass through transparently — the
//! gateway adds only the "no such dispute" case the registry owns.

use thiserror::Error;

use parley_core::DisputeId;
use parley_protocol::DisputeError;

/// Errors surfaced by gateway operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// No dispute is registered under the given identifier.
    #[error("{0} not found")]
    NotFound(DisputeId),

    /// The protocol rejected the submission.
    #[error(transparent)]
    Dispute(#[from] DisputeError),
}
