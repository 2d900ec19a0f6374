//! # Dispute Gateway
//!
//! The operation set an external caller invokes. Each mutating operation
//! resolves the acting identity, delegates the state transition to the
//! dispute, and projects the actor's refreshed view — all inside the
//! registry's per-call critical section, so the view always reflects
//! exactly the state the submission produced.
//!
//! A mutating call against a dispute that is not active (still in setup,
//! or already settled) is accepted as a benign no-op: the caller gets the
//! current view back unchanged rather than an error.

use parley_core::{DisputeId, PartyName};
use parley_protocol::{
    BidOutcome, Dispute, DisputeError, DisputeView, Party, SetupOutcome, VoteOutcome,
};

use crate::error::GatewayError;
use crate::registry::DisputeRegistry;

/// External-facing operation surface over a dispute registry.
#[derive(Debug, Clone, Default)]
pub struct DisputeGateway {
    registry: DisputeRegistry,
}

impl DisputeGateway {
    /// Create a gateway over an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway over an existing registry.
    pub fn with_registry(registry: DisputeRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &DisputeRegistry {
        &self.registry
    }

    /// Open a new dispute with the given public terms.
    pub fn create_dispute(
        &self,
        claimant: PartyName,
        respondent: PartyName,
        claim: f64,
        offer: f64,
    ) -> Result<DisputeId, GatewayError> {
        let id = self.registry.create(claimant, respondent, claim, offer)?;
        tracing::info!(dispute = %id, claim, offer, "dispute created");
        Ok(id)
    }

    /// Submit the acting party's private value during setup.
    pub fn submit_setup_value(
        &self,
        id: DisputeId,
        acting: &PartyName,
        value: f64,
    ) -> Result<DisputeView, GatewayError> {
        let (outcome, view) = self.mutate(id, acting, |dispute, party| {
            let outcome = dispute.submit_setup_value(party, value)?;
            Ok((outcome, DisputeView::project(dispute, party)))
        })?;
        match outcome {
            SetupOutcome::Activated => {
                tracing::info!(dispute = %id, party = %acting, "setup complete, bargaining active");
            }
            SetupOutcome::AwaitingOther => {
                tracing::debug!(dispute = %id, party = %acting, "private value recorded");
            }
        }
        Ok(view)
    }

    /// Submit a sealed bid for the acting party.
    pub fn submit_bid(
        &self,
        id: DisputeId,
        acting: &PartyName,
        amount: f64,
    ) -> Result<DisputeView, GatewayError> {
        let (outcome, view) = self.mutate(id, acting, |dispute, party| {
            let outcome = dispute.submit_bid(party, amount)?;
            Ok((outcome, DisputeView::project(dispute, party)))
        })?;
        match outcome {
            BidOutcome::Inactive => {
                tracing::debug!(dispute = %id, party = %acting, "bid ignored, dispute not active");
            }
            BidOutcome::AwaitingCounterbid => {
                tracing::debug!(dispute = %id, party = %acting, round = view.current_round, "bid sealed");
            }
            BidOutcome::Proposal(proposal) => {
                tracing::info!(dispute = %id, round = view.current_round, proposal, "bids crossed, proposal open for votes");
            }
            BidOutcome::Impasse => {
                tracing::info!(dispute = %id, round = view.current_round, "round closed at impasse");
            }
        }
        Ok(view)
    }

    /// Submit the acting party's vote on the open proposal.
    pub fn submit_vote(
        &self,
        id: DisputeId,
        acting: &PartyName,
        vote: bool,
    ) -> Result<DisputeView, GatewayError> {
        let (outcome, view) = self.mutate(id, acting, |dispute, party| {
            let outcome = dispute.submit_vote(party, vote)?;
            Ok((outcome, DisputeView::project(dispute, party)))
        })?;
        match outcome {
            VoteOutcome::Inactive => {
                tracing::debug!(dispute = %id, party = %acting, "vote ignored, dispute not active");
            }
            VoteOutcome::AwaitingOther => {
                tracing::debug!(dispute = %id, party = %acting, "vote recorded");
            }
            VoteOutcome::Settled(settlement) => {
                tracing::info!(dispute = %id, settlement, "dispute settled");
            }
            VoteOutcome::Rejected => {
                tracing::info!(dispute = %id, round = view.current_round, "proposal rejected, bargaining continues");
            }
        }
        Ok(view)
    }

    /// Fetch the acting party's current view without mutating anything.
    pub fn view(&self, id: DisputeId, acting: &PartyName) -> Result<DisputeView, GatewayError> {
        let dispute = self.registry.get(id).ok_or(GatewayError::NotFound(id))?;
        let party = dispute.party_of(acting)?;
        Ok(DisputeView::project(&dispute, party))
    }

    /// Run a mutating operation for `acting` under the registry lock.
    fn mutate<R>(
        &self,
        id: DisputeId,
        acting: &PartyName,
        f: impl FnOnce(&mut Dispute, Party) -> Result<R, DisputeError>,
    ) -> Result<R, GatewayError> {
        let result = self
            .registry
            .try_update(id, |dispute| {
                let party = dispute.party_of(acting)?;
                f(dispute, party)
            })
            .ok_or(GatewayError::NotFound(id))?;
        result.map_err(|err| {
            tracing::warn!(dispute = %id, party = %acting, error = %err, "submission rejected");
            GatewayError::from(err)
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
