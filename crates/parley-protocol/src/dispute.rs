//! # Dispute Aggregate
//!
//! The dispute owns the public terms, both parties' private values, the
//! ordered round history, and the dispute-level status machine.
//!
//! ## States
//!
//! ```text
//! Setup ──both private values──▶ Active ──unanimous vote──▶ Settled (terminal)
//! ```
//!
//! A round closing at `Impasse` or `Rejected` never moves the dispute out
//! of `Active` — the next bid simply opens a fresh round. The only terminal
//! dispute status is `Settled`.
//!
//! ## Bid Bounds
//!
//! Each party bids inside the public range tightened by their own private
//! value: the claimant in `[max(offer, floor), claim]`, the respondent in
//! `[offer, min(claim, ceiling)]`. The tightened bounds are the acceptance
//! rule, not merely display hints; a bid outside them is rejected and
//! leaves the dispute untouched.

use serde::{Deserialize, Serialize};

use parley_core::{DisputeId, PartyName, Timestamp};

use crate::error::DisputeError;
use crate::party::Party;
use crate::round::{Round, RoundStatus};

// ─── Dispute Status ──────────────────────────────────────────────────

/// The lifecycle status of a dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisputeStatus {
    /// Waiting for both parties to submit their private values.
    Setup,
    /// Bargaining rounds are in progress.
    Active,
    /// A proposal was accepted unanimously (terminal).
    Settled,
}

impl DisputeStatus {
    /// Whether this status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled)
    }

    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setup => "SETUP",
            Self::Active => "ACTIVE",
            Self::Settled => "SETTLED",
        }
    }
}

impl std::fmt::Display for DisputeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Transition Log ──────────────────────────────────────────────────

/// Record of a dispute status transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    /// Status before the transition.
    pub from: DisputeStatus,
    /// Status after the transition.
    pub to: DisputeStatus,
    /// When the transition occurred.
    pub at: Timestamp,
}

// ─── Operation Outcomes ──────────────────────────────────────────────

/// Outcome of a private-value submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Recorded; still waiting on the counterparty's value.
    AwaitingOther,
    /// Both values present — the dispute is now active.
    Activated,
}

/// Outcome of a bid submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BidOutcome {
    /// The dispute is not active; the submission was ignored.
    Inactive,
    /// Recorded; the round is waiting on the counterparty's bid.
    AwaitingCounterbid,
    /// Both bids crossed — the round proposes this midpoint.
    Proposal(f64),
    /// Both bids failed to cross — the round closed at impasse.
    Impasse,
}

/// Outcome of a vote submission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VoteOutcome {
    /// The dispute is not active; the submission was ignored.
    Inactive,
    /// Recorded; the round is waiting on the counterparty's vote.
    AwaitingOther,
    /// Unanimous acceptance — the dispute settled at this amount.
    Settled(f64),
    /// The proposal was declined; the round closed, bargaining continues.
    Rejected,
}

// ─── Dispute ─────────────────────────────────────────────────────────

/// A disputed monetary claim under blind bargaining.
///
/// Holds Player 1 (the claimant, public claim `claim`, private floor) and
/// Player 2 (the respondent, public offer `offer`, private ceiling). Rounds
/// accumulate for the life of the dispute and are never removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Unique identifier, assigned at creation.
    pub id: DisputeId,
    /// Player 1's identity.
    pub claimant: PartyName,
    /// Player 2's identity.
    pub respondent: PartyName,
    /// Player 1's public claim — the upper end of the bargaining range.
    pub claim: f64,
    /// Player 2's public offer — the lower end of the bargaining range.
    pub offer: f64,
    /// Player 1's private minimum acceptable value. Never disclosed to
    /// the respondent.
    pub claimant_floor: Option<f64>,
    /// Player 2's private maximum offer. Never disclosed to the claimant.
    pub respondent_ceiling: Option<f64>,
    /// Current dispute status.
    pub status: DisputeStatus,
    /// The agreed amount, set exactly when the dispute settles.
    pub settlement: Option<f64>,
    /// Ordered round history, append-only. Index = round number − 1.
    pub rounds: Vec<Round>,
    /// Audit log of dispute status transitions.
    pub transitions: Vec<StatusRecord>,
    /// When the dispute was created. Informational only.
    pub created_at: Timestamp,
}

impl Dispute {
    /// Open a new dispute in the `Setup` phase.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::NonFiniteAmount`] if either public term is NaN
    ///   or infinite.
    /// - [`DisputeError::InvalidTerms`] if `offer > claim`.
    /// - [`DisputeError::MatchingParties`] if both identities are equal.
    pub fn open(
        id: DisputeId,
        claimant: PartyName,
        respondent: PartyName,
        claim: f64,
        offer: f64,
    ) -> Result<Self, DisputeError> {
        ensure_finite(claim)?;
        ensure_finite(offer)?;
        if offer > claim {
            return Err(DisputeError::InvalidTerms { claim, offer });
        }
        if claimant == respondent {
            return Err(DisputeError::MatchingParties {
                name: claimant.to_string(),
            });
        }
        Ok(Self {
            id,
            claimant,
            respondent,
            claim,
            offer,
            claimant_floor: None,
            respondent_ceiling: None,
            status: DisputeStatus::Setup,
            settlement: None,
            rounds: Vec::new(),
            transitions: Vec::new(),
            created_at: Timestamp::now(),
        })
    }

    /// Resolve an acting identity to its role in this dispute.
    pub fn party_of(&self, name: &PartyName) -> Result<Party, DisputeError> {
        if *name == self.claimant {
            Ok(Party::Claimant)
        } else if *name == self.respondent {
            Ok(Party::Respondent)
        } else {
            Err(DisputeError::UnknownParty {
                dispute: self.id,
                party: name.to_string(),
            })
        }
    }

    /// The identity acting in the given role.
    pub fn party_name(&self, party: Party) -> &PartyName {
        match party {
            Party::Claimant => &self.claimant,
            Party::Respondent => &self.respondent,
        }
    }

    /// The given party's own private value, if submitted.
    pub fn private_value(&self, party: Party) -> Option<f64> {
        match party {
            Party::Claimant => self.claimant_floor,
            Party::Respondent => self.respondent_ceiling,
        }
    }

    /// The current round, if any.
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Whether the dispute has settled.
    pub fn is_settled(&self) -> bool {
        self.status.is_terminal()
    }

    /// Submit a party's private value during setup.
    ///
    /// The claimant submits their floor, the respondent their ceiling.
    /// During `Setup` a party may overwrite their own value; once both are
    /// present the dispute activates and further submissions are rejected.
    /// Completion is commutative — either party may go first.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::NonFiniteAmount`] for NaN/infinite values.
    /// - [`DisputeError::SetupComplete`] once the dispute has left `Setup`.
    pub fn submit_setup_value(
        &mut self,
        party: Party,
        value: f64,
    ) -> Result<SetupOutcome, DisputeError> {
        ensure_finite(value)?;
        if self.status != DisputeStatus::Setup {
            return Err(DisputeError::SetupComplete { dispute: self.id });
        }
        match party {
            Party::Claimant => self.claimant_floor = Some(value),
            Party::Respondent => self.respondent_ceiling = Some(value),
        }
        if self.claimant_floor.is_some() && self.respondent_ceiling.is_some() {
            self.transition_status(DisputeStatus::Active);
            Ok(SetupOutcome::Activated)
        } else {
            Ok(SetupOutcome::AwaitingOther)
        }
    }

    /// The given party's effective bid range, `None` until that party's
    /// private value is set.
    ///
    /// Claimant: `[max(offer, floor), claim]`. Respondent:
    /// `[offer, min(claim, ceiling)]`. A private value outside the public
    /// range can make the interval empty, in which case no bid from that
    /// party is acceptable.
    pub fn bid_bounds(&self, party: Party) -> Option<(f64, f64)> {
        match party {
            Party::Claimant => self
                .claimant_floor
                .map(|floor| (self.offer.max(floor), self.claim)),
            Party::Respondent => self
                .respondent_ceiling
                .map(|ceiling| (self.offer, self.claim.min(ceiling))),
        }
    }

    /// Submit a sealed bid for the current round.
    ///
    /// Ignored (no state change) unless the dispute is `Active`. Opens a
    /// fresh round when none is collecting bids — including when the last
    /// round is mid-vote, which abandons that round. Records the bid
    /// (last write wins until the counterpart responds) and applies the
    /// round's bidding transition.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::NonFiniteAmount`] for NaN/infinite bids.
    /// - [`DisputeError::BidOutOfRange`] when the bid violates the
    ///   party's effective bounds.
    pub fn submit_bid(&mut self, party: Party, amount: f64) -> Result<BidOutcome, DisputeError> {
        if self.status != DisputeStatus::Active {
            return Ok(BidOutcome::Inactive);
        }
        ensure_finite(amount)?;
        let (min, max) = self.bid_bounds(party).ok_or_else(|| {
            // Active implies both private values are present.
            DisputeError::Inconsistency {
                dispute: self.id,
                detail: format!("active dispute has no private value for {party}"),
            }
        })?;
        if amount < min || amount > max {
            return Err(DisputeError::BidOutOfRange {
                party,
                amount,
                min,
                max,
            });
        }

        if self.rounds.last().map_or(true, |r| !r.is_open_for_bids()) {
            let number = self.rounds.len() as u32 + 1;
            self.rounds.push(Round::open(number));
        }
        let id = self.id;
        let round = match self.rounds.last_mut() {
            Some(round) => round,
            None => {
                return Err(DisputeError::Inconsistency {
                    dispute: id,
                    detail: "no round open after lazy creation".to_string(),
                })
            }
        };

        match round.record_bid(party, amount) {
            RoundStatus::Bidding => Ok(BidOutcome::AwaitingCounterbid),
            RoundStatus::Voting => {
                let proposal = round.proposal.ok_or_else(|| DisputeError::Inconsistency {
                    dispute: id,
                    detail: format!("round {} is voting without a proposal", round.number),
                })?;
                Ok(BidOutcome::Proposal(proposal))
            }
            RoundStatus::Impasse => Ok(BidOutcome::Impasse),
            status @ (RoundStatus::Agreed | RoundStatus::Rejected) => {
                Err(DisputeError::Inconsistency {
                    dispute: id,
                    detail: format!("bid transition produced {status}"),
                })
            }
        }
    }

    /// Submit a vote on the current round's proposal.
    ///
    /// Ignored (no state change) unless the dispute is `Active` — in
    /// particular, votes after settlement are no-ops against the frozen
    /// dispute. Records the vote (last write wins until the counterpart
    /// responds) and applies the round's voting transition. Unanimous
    /// acceptance settles the dispute at the proposal; any rejection
    /// closes the round and bargaining continues.
    ///
    /// # Errors
    ///
    /// - [`DisputeError::NotVoting`] when no round is collecting votes.
    pub fn submit_vote(&mut self, party: Party, vote: bool) -> Result<VoteOutcome, DisputeError> {
        if self.status != DisputeStatus::Active {
            return Ok(VoteOutcome::Inactive);
        }
        let (index, proposal) = match self.rounds.last() {
            Some(round) if round.status == RoundStatus::Voting => {
                let proposal = round.proposal.ok_or_else(|| DisputeError::Inconsistency {
                    dispute: self.id,
                    detail: format!("round {} is voting without a proposal", round.number),
                })?;
                (self.rounds.len() - 1, proposal)
            }
            other => {
                return Err(DisputeError::NotVoting {
                    dispute: self.id,
                    round_status: other
                        .map(|r| r.status.as_str().to_string())
                        .unwrap_or_else(|| "none".to_string()),
                })
            }
        };

        match self.rounds[index].record_vote(party, vote) {
            RoundStatus::Voting => Ok(VoteOutcome::AwaitingOther),
            RoundStatus::Agreed => {
                self.settlement = Some(proposal);
                self.transition_status(DisputeStatus::Settled);
                Ok(VoteOutcome::Settled(proposal))
            }
            RoundStatus::Rejected => Ok(VoteOutcome::Rejected),
            status @ (RoundStatus::Bidding | RoundStatus::Impasse) => {
                Err(DisputeError::Inconsistency {
                    dispute: self.id,
                    detail: format!("vote transition produced {status}"),
                })
            }
        }
    }

    /// Record a dispute status transition.
    fn transition_status(&mut self, to: DisputeStatus) {
        self.transitions.push(StatusRecord {
            from: self.status,
            to,
            at: Timestamp::now(),
        });
        self.status = to;
    }
}

/// Reject NaN and infinite monetary inputs at the edge.
pub(crate) fn ensure_finite(amount: f64) -> Result<(), DisputeError> {
    if amount.is_finite() {
        Ok(())
    } else {
        Err(DisputeError::NonFiniteAmount(amount))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
