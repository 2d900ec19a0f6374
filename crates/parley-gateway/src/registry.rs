//! # Dispute Registry
//!
//! Thread-safe, cloneable in-memory store of every dispute in the
//! process, keyed by registry-issued monotonic identifiers.
//!
//! All operations are synchronous (the lock is `parking_lot`, not an
//! async lock) because no caller holds it across an await point.
//! `parking_lot::RwLock` is non-poisonable — a panicking writer does not
//! permanently corrupt the store.
//!
//! The identifier counter lives under the same lock as the map, so ids
//! are dense (0, 1, 2, …) and two concurrent creations can never race to
//! the same id.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use parley_core::{DisputeId, PartyName};
use parley_protocol::{Dispute, DisputeError};

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    disputes: HashMap<DisputeId, Dispute>,
}

/// Registry of all disputes for the process lifetime.
///
/// Cloning is shallow: clones share the same underlying store.
#[derive(Debug, Default)]
pub struct DisputeRegistry {
    inner: Arc<RwLock<RegistryInner>>,
}

impl Clone for DisputeRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl DisputeRegistry {
    /// Create an empty registry. Identifier issuance starts at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new dispute and issue its identifier.
    ///
    /// Validation failures (inverted terms, matching parties, non-finite
    /// amounts) reject the creation without consuming an identifier.
    pub fn create(
        &self,
        claimant: PartyName,
        respondent: PartyName,
        claim: f64,
        offer: f64,
    ) -> Result<DisputeId, DisputeError> {
        let mut guard = self.inner.write();
        let id = DisputeId(guard.next_id);
        let dispute = Dispute::open(id, claimant, respondent, claim, offer)?;
        guard.next_id += 1;
        guard.disputes.insert(id, dispute);
        Ok(id)
    }

    /// Retrieve a dispute by id as a consistent snapshot.
    pub fn get(&self, id: DisputeId) -> Option<Dispute> {
        self.inner.read().disputes.get(&id).cloned()
    }

    /// Atomically read-validate-update a dispute.
    ///
    /// The closure receives `&mut Dispute` and may inspect the current
    /// state, validate preconditions, mutate, and return `Ok(R)` or
    /// `Err(DisputeError)`. The entire operation runs under a single
    /// write lock, eliminating check-then-act races between two
    /// submissions for the same dispute.
    ///
    /// Returns `None` if the dispute does not exist — the closure is not
    /// invoked in that case.
    pub fn try_update<R>(
        &self,
        id: DisputeId,
        f: impl FnOnce(&mut Dispute) -> Result<R, DisputeError>,
    ) -> Option<Result<R, DisputeError>> {
        self.inner.write().disputes.get_mut(&id).map(f)
    }

    /// Whether a dispute exists under the given id.
    pub fn contains(&self, id: DisputeId) -> bool {
        self.inner.read().disputes.contains_key(&id)
    }

    /// Number of registered disputes.
    pub fn len(&self) -> usize {
        self.inner.read().disputes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
