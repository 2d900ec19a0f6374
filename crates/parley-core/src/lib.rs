//! # parley-core — Foundational Types for Parley
//!
//! The leaf crate of the Parley workspace. Defines the primitives every
//! other crate builds on:
//!
//! 1. **Newtype wrappers for domain identifiers.** [`DisputeId`] and
//!    [`PartyName`] — no bare integers or strings cross a crate boundary.
//!    `PartyName` has a validated constructor; malformed identities are
//!    rejected at the edge, not deep inside the state machine.
//!
//! 2. **UTC-only timestamps.** [`Timestamp`] enforces UTC with Z suffix
//!    and seconds precision. Non-UTC inputs are rejected at construction.
//!
//! 3. **Structured errors.** [`CoreError`] via `thiserror` — every variant
//!    carries the offending input.
//!
//! ## Crate Policy
//!
//! - Depends on no other `parley-*` crate.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

pub use error::CoreError;
pub use identity::{DisputeId, PartyName};
pub use temporal::Timestamp;
