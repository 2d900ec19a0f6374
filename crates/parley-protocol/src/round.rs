//! # Sealed-Bid Round
//!
//! One bidding/voting cycle of a dispute. A round holds both parties'
//! sealed bids and votes and computes its own derived status from them.
//!
//! ## States
//!
//! ```text
//! Bidding ──both bids, b1 ≤ b2──▶ Voting ──both yes──▶ Agreed
//!    │                              │
//!    │                              └──any no──▶ Rejected
//!    │
//!    └──both bids, b1 > b2──▶ Impasse
//! ```
//!
//! `Agreed`, `Rejected`, and `Impasse` are terminal for the round.
//! They are never terminal for the parent dispute: the dispute opens a
//! fresh round the next time either party bids.

use serde::{Deserialize, Serialize};

use crate::party::Party;

// ─── Round Status ────────────────────────────────────────────────────

/// The status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Collecting sealed bids.
    Bidding,
    /// Bids crossed favorably; collecting votes on the midpoint proposal.
    Voting,
    /// Both parties accepted the proposal (terminal).
    Agreed,
    /// At least one party declined the proposal (terminal).
    Rejected,
    /// Bids did not cross; no proposal was generated (terminal).
    Impasse,
}

impl RoundStatus {
    /// Whether this status is terminal for the round.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Agreed | Self::Rejected | Self::Impasse)
    }

    /// The canonical string name of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bidding => "BIDDING",
            Self::Voting => "VOTING",
            Self::Agreed => "AGREED",
            Self::Rejected => "REJECTED",
            Self::Impasse => "IMPASSE",
        }
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Round Result ────────────────────────────────────────────────────

/// The recorded outcome of a closed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    /// Unanimous acceptance of the proposal.
    Agreement,
    /// The proposal was declined.
    Rejected,
    /// The bids did not cross.
    Impasse,
}

impl RoundResult {
    /// The canonical string name of this result.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agreement => "AGREEMENT",
            Self::Rejected => "REJECTED",
            Self::Impasse => "IMPASSE",
        }
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Round ───────────────────────────────────────────────────────────

/// One sealed-bid/vote cycle.
///
/// All monetary slots are explicit optionals — `None` means "not yet
/// submitted", so a legitimate zero bid is never confused with absence.
/// Re-submission by the same party before the counterpart responds
/// overwrites in place (last write wins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based position within the dispute's round history.
    pub number: u32,
    /// The claimant's sealed bid.
    pub claimant_bid: Option<f64>,
    /// The respondent's sealed bid.
    pub respondent_bid: Option<f64>,
    /// Midpoint settlement proposal, set only on a favorable crossing.
    pub proposal: Option<f64>,
    /// The claimant's vote on the proposal.
    pub claimant_vote: Option<bool>,
    /// The respondent's vote on the proposal.
    pub respondent_vote: Option<bool>,
    /// Current round status.
    pub status: RoundStatus,
    /// Recorded outcome, set when the round closes.
    pub result: Option<RoundResult>,
}

impl Round {
    /// Open a new round at the given 1-based position.
    pub fn open(number: u32) -> Self {
        Self {
            number,
            claimant_bid: None,
            respondent_bid: None,
            proposal: None,
            claimant_vote: None,
            respondent_vote: None,
            status: RoundStatus::Bidding,
            result: None,
        }
    }

    /// Whether the round is still collecting bids.
    pub fn is_open_for_bids(&self) -> bool {
        self.status == RoundStatus::Bidding
    }

    /// The given party's bid, if submitted.
    pub fn bid_of(&self, party: Party) -> Option<f64> {
        match party {
            Party::Claimant => self.claimant_bid,
            Party::Respondent => self.respondent_bid,
        }
    }

    /// The given party's vote, if submitted.
    pub fn vote_of(&self, party: Party) -> Option<bool> {
        match party {
            Party::Claimant => self.claimant_vote,
            Party::Respondent => self.respondent_vote,
        }
    }

    /// Record a bid and apply the bidding transition.
    ///
    /// Once both bids are present: crossing bids (`b1 ≤ b2`) move the round
    /// to `Voting` with the midpoint proposal; non-crossing bids close the
    /// round at `Impasse`. Returns the status after the submission.
    ///
    /// Caller must ensure the round is in `Bidding` status.
    pub(crate) fn record_bid(&mut self, party: Party, amount: f64) -> RoundStatus {
        debug_assert_eq!(self.status, RoundStatus::Bidding);
        match party {
            Party::Claimant => self.claimant_bid = Some(amount),
            Party::Respondent => self.respondent_bid = Some(amount),
        }
        if let (Some(b1), Some(b2)) = (self.claimant_bid, self.respondent_bid) {
            if b1 <= b2 {
                self.proposal = Some((b1 + b2) / 2.0);
                self.status = RoundStatus::Voting;
            } else {
                self.status = RoundStatus::Impasse;
                self.result = Some(RoundResult::Impasse);
            }
        }
        self.status
    }

    /// Record a vote and apply the voting transition.
    ///
    /// Once both votes are present: unanimous acceptance closes the round
    /// at `Agreed`; any rejection closes it at `Rejected`. Returns the
    /// status after the submission.
    ///
    /// Caller must ensure the round is in `Voting` status.
    pub(crate) fn record_vote(&mut self, party: Party, vote: bool) -> RoundStatus {
        debug_assert_eq!(self.status, RoundStatus::Voting);
        match party {
            Party::Claimant => self.claimant_vote = Some(vote),
            Party::Respondent => self.respondent_vote = Some(vote),
        }
        if let (Some(v1), Some(v2)) = (self.claimant_vote, self.respondent_vote) {
            if v1 && v2 {
                self.status = RoundStatus::Agreed;
                self.result = Some(RoundResult::Agreement);
            } else {
                self.status = RoundStatus::Rejected;
                self.result = Some(RoundResult::Rejected);
            }
        }
        self.status
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
