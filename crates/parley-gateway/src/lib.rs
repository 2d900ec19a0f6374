//! # parley-gateway — External Operation Surface
//!
//! The layer an I/O shell (HTTP handlers, a CLI, a test harness) calls
//! into. Two pieces:
//!
//! - **Registry** (`registry.rs`): owns every dispute for the process
//!   lifetime. Thread-safe, issues monotonically increasing dispute
//!   identifiers, and serializes mutations per call under a single write
//!   lock so concurrent submissions for the same dispute cannot interleave
//!   mid-transition.
//!
//! - **Gateway** (`gateway.rs`): the operation set — create, submit a
//!   setup value, submit a bid, submit a vote, fetch a view. Validates the
//!   acting identity and dispute phase by delegating to `parley-protocol`,
//!   and returns the acting party's refreshed view from inside the same
//!   critical section.
//!
//! ## Crate Policy
//!
//! - No business logic here — the state machines live in
//!   `parley-protocol`; this crate only stores, locks, logs, and projects.
//! - No `unsafe` code, no `panic!()`/`.unwrap()` outside tests.

pub mod error;
pub mod gateway;
pub mod registry;

pub use error::GatewayError;
pub use gateway::DisputeGateway;
pub use registry::DisputeRegistry;
