//! # parley-protocol — Blind-Bargaining State Machines
//!
//! Implements the core of the Parley settlement protocol: two parties with
//! public opening positions and undisclosed reservation values bargain
//! through repeated rounds of simultaneous sealed bidding. When the bids
//! cross favorably, the round proposes the midpoint as a settlement, which
//! both parties must accept unanimously.
//!
//! ## Modules
//!
//! - **Party** (`party.rs`): the two bargaining roles.
//!
//! - **Round** (`round.rs`): one sealed-bid/vote cycle. Pure data plus the
//!   transition rules that compute the round's own derived status.
//!
//! - **Dispute** (`dispute.rs`): the aggregate — public terms, both private
//!   values, the ordered round history, and the dispute-level status
//!   machine (SETUP → ACTIVE → SETTLED). Owns round creation and
//!   orchestrates cross-round transitions.
//!
//! - **View** (`view.rs`): per-party read projection with the derived
//!   display flags. Never exposes the counterparty's private value.
//!
//! ## Crate Policy
//!
//! - Depends on `parley-core` only.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests — rejected submissions
//!   leave the dispute unmodified and surface structured errors.

pub mod dispute;
pub mod error;
pub mod party;
pub mod round;
pub mod view;

pub use dispute::{BidOutcome, Dispute, DisputeStatus, SetupOutcome, StatusRecord, VoteOutcome};
pub use error::DisputeError;
pub use party::Party;
pub use round::{Round, RoundResult, RoundStatus};
pub use view::DisputeView;
