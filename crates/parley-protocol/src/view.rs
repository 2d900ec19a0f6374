//! # Per-Party Read Projection
//!
//! A [`DisputeView`] is what one party is allowed to see: the public
//! terms, their own private value, the round history, and the derived
//! flags a caller needs to drive its display (whose move it is, the
//! party's permitted bid range). Projection never mutates the dispute
//! and never includes the counterparty's private value.

use serde::{Deserialize, Serialize};

use parley_core::{DisputeId, PartyName};

use crate::dispute::{Dispute, DisputeStatus};
use crate::party::Party;
use crate::round::{Round, RoundStatus};

/// One party's view of a dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisputeView {
    /// The dispute identifier.
    pub dispute: DisputeId,
    /// The viewing party's role.
    pub role: Party,
    /// Player 1's identity (public).
    pub claimant: PartyName,
    /// Player 2's identity (public).
    pub respondent: PartyName,
    /// Player 1's public claim.
    pub claim: f64,
    /// Player 2's public offer.
    pub offer: f64,
    /// The viewing party's own private value, if submitted. The
    /// counterparty's value is never present in any view.
    pub private_value: Option<f64>,
    /// Whether the viewing party has completed setup.
    pub setup_submitted: bool,
    /// Whether the counterparty has completed setup.
    pub other_setup_submitted: bool,
    /// Current dispute status.
    pub status: DisputeStatus,
    /// The agreed amount, if settled.
    pub settlement: Option<f64>,
    /// Full round history.
    pub rounds: Vec<Round>,
    /// Number of rounds played or in progress.
    pub current_round: usize,
    /// Whether the viewing party has bid in the open round.
    pub has_bid: bool,
    /// Whether the viewing party's bid is in and the counterparty's is
    /// still outstanding.
    pub awaiting_counterbid: bool,
    /// Whether the viewing party has voted on the open proposal.
    pub has_voted: bool,
    /// Whether the open round is waiting on the viewing party's vote.
    pub awaiting_vote: bool,
    /// Lower end of the viewing party's permitted bid range.
    pub bid_floor: Option<f64>,
    /// Upper end of the viewing party's permitted bid range.
    pub bid_ceiling: Option<f64>,
}

impl DisputeView {
    /// Project the dispute as seen by the given party.
    pub fn project(dispute: &Dispute, role: Party) -> Self {
        let last = dispute.rounds.last();

        let (has_bid, awaiting_counterbid) = match last {
            Some(round) if round.status == RoundStatus::Bidding => {
                let own = round.bid_of(role).is_some();
                let other = round.bid_of(role.other()).is_some();
                (own, own && !other)
            }
            _ => (false, false),
        };

        let (has_voted, awaiting_vote) = match last {
            Some(round) if round.status == RoundStatus::Voting => {
                let own = round.vote_of(role).is_some();
                (own, !own)
            }
            _ => (false, false),
        };

        let bounds = dispute.bid_bounds(role);

        Self {
            dispute: dispute.id,
            role,
            claimant: dispute.claimant.clone(),
            respondent: dispute.respondent.clone(),
            claim: dispute.claim,
            offer: dispute.offer,
            private_value: dispute.private_value(role),
            setup_submitted: dispute.private_value(role).is_some(),
            other_setup_submitted: dispute.private_value(role.other()).is_some(),
            status: dispute.status,
            settlement: dispute.settlement,
            rounds: dispute.rounds.clone(),
            current_round: dispute.rounds.len(),
            has_bid,
            awaiting_counterbid,
            has_voted,
            awaiting_vote,
            bid_floor: bounds.map(|(min, _)| min),
            bid_ceiling: bounds.map(|(_, max)| max),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
