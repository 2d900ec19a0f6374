//! # Protocol Error Types
//!
//! Structured error hierarchy for the bargaining protocol. Every variant
//! carries enough context to diagnose the rejection without inspecting
//! logs: the dispute, the acting party, and the offending values.
//!
//! Rejected submissions never mutate state — a dispute that returns an
//! error from any operation is bit-for-bit the dispute it was before.

use thiserror::Error;

use parley_core::DisputeId;

use crate::party::Party;

/// Errors arising from dispute and round operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DisputeError {
    /// The acting identity matches neither party of the dispute.
    #[error("\"{party}\" is not a participant in {dispute}")]
    UnknownParty {
        /// The dispute identifier.
        dispute: DisputeId,
        /// The identity string that failed to resolve.
        party: String,
    },

    /// Public terms inverted at creation: the opening offer must not
    /// exceed the opening claim.
    #[error("public offer {offer} exceeds public claim {claim}")]
    InvalidTerms {
        /// Player 1's public claim.
        claim: f64,
        /// Player 2's public offer.
        offer: f64,
    },

    /// Both party slots were given the same identity string. Such a
    /// dispute could never resolve its second player.
    #[error("claimant and respondent must be distinct identities, both are \"{name}\"")]
    MatchingParties {
        /// The duplicated identity string.
        name: String,
    },

    /// A monetary input was NaN or infinite.
    #[error("monetary amount must be finite, got {0}")]
    NonFiniteAmount(f64),

    /// A private value was submitted after the setup phase completed.
    /// Private values are set once.
    #[error("setup for {dispute} is already complete")]
    SetupComplete {
        /// The dispute identifier.
        dispute: DisputeId,
    },

    /// A bid fell outside the player's effective range — the public bounds
    /// tightened by that player's own private value.
    #[error("bid {amount} from {party} is outside the permitted range [{min}, {max}]")]
    BidOutOfRange {
        /// The bidding party.
        party: Party,
        /// The rejected bid.
        amount: f64,
        /// Effective lower bound for this party.
        min: f64,
        /// Effective upper bound for this party.
        max: f64,
    },

    /// A vote was submitted while no round is collecting votes.
    #[error("{dispute} is not collecting votes: current round status is {round_status}")]
    NotVoting {
        /// The dispute identifier.
        dispute: DisputeId,
        /// The status of the current round, or `"none"` if no round exists.
        round_status: String,
    },

    /// Internal consistency violation. Indicates a bug in the protocol
    /// implementation, never a user error.
    #[error("{dispute} violated an internal invariant: {detail}")]
    Inconsistency {
        /// The dispute identifier.
        dispute: DisputeId,
        /// What was found to be inconsistent.
        detail: String,
    },
}
