//! End-to-end bargaining sessions driven through the public gateway
//! surface, exactly as an I/O shell would drive them: every call carries
//! the dispute id and the acting identity, and every assertion reads the
//! returned view or a registry snapshot.

use parley_core::{DisputeId, PartyName};
use parley_gateway::{DisputeGateway, GatewayError};
use parley_protocol::{DisputeError, DisputeStatus, RoundResult, RoundStatus};

fn name(s: &str) -> PartyName {
    PartyName::new(s).unwrap()
}

/// Honor RUST_LOG when the suite is run by hand.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Gateway with one active dispute: claim 100, offer 10, floor 20, ceiling 80.
fn active_session() -> (DisputeGateway, DisputeId) {
    init_tracing();
    let gateway = DisputeGateway::new();
    let id = gateway
        .create_dispute(name("alice"), name("bob"), 100.0, 10.0)
        .unwrap();
    gateway.submit_setup_value(id, &name("alice"), 20.0).unwrap();
    gateway.submit_setup_value(id, &name("bob"), 80.0).unwrap();
    (gateway, id)
}

// ─── Happy path ──────────────────────────────────────────────────────

#[test]
fn single_round_settlement() {
    let (gateway, id) = active_session();

    let view = gateway.submit_bid(id, &name("alice"), 30.0).unwrap();
    assert!(view.awaiting_counterbid);

    let view = gateway.submit_bid(id, &name("bob"), 50.0).unwrap();
    assert_eq!(view.rounds[0].status, RoundStatus::Voting);
    assert_eq!(view.rounds[0].proposal, Some(40.0));
    assert!(view.awaiting_vote);

    gateway.submit_vote(id, &name("alice"), true).unwrap();
    let view = gateway.submit_vote(id, &name("bob"), true).unwrap();

    assert_eq!(view.status, DisputeStatus::Settled);
    assert_eq!(view.settlement, Some(40.0));
    assert_eq!(view.rounds[0].result, Some(RoundResult::Agreement));
}

#[test]
fn setup_order_is_commutative() {
    let gateway = DisputeGateway::new();
    let id = gateway
        .create_dispute(name("alice"), name("bob"), 100.0, 10.0)
        .unwrap();

    // Respondent first.
    let view = gateway.submit_setup_value(id, &name("bob"), 80.0).unwrap();
    assert_eq!(view.status, DisputeStatus::Setup);
    assert!(view.setup_submitted);
    assert!(!view.other_setup_submitted);

    let view = gateway.submit_setup_value(id, &name("alice"), 20.0).unwrap();
    assert_eq!(view.status, DisputeStatus::Active);
    assert_eq!(view.bid_floor, Some(20.0));
    assert_eq!(view.bid_ceiling, Some(100.0));
}

// ─── Impasse and rejection keep the dispute alive ────────────────────

#[test]
fn impasse_closes_round_not_dispute() {
    let (gateway, id) = active_session();

    gateway.submit_bid(id, &name("alice"), 60.0).unwrap();
    let view = gateway.submit_bid(id, &name("bob"), 50.0).unwrap();
    assert_eq!(view.rounds[0].status, RoundStatus::Impasse);
    assert_eq!(view.status, DisputeStatus::Active);

    // Either party may reopen play.
    let view = gateway.submit_bid(id, &name("bob"), 55.0).unwrap();
    assert_eq!(view.current_round, 2);
    assert_eq!(view.rounds[1].number, 2);
}

#[test]
fn rejected_proposal_reopens_bidding() {
    let (gateway, id) = active_session();

    gateway.submit_bid(id, &name("alice"), 48.0).unwrap();
    gateway.submit_bid(id, &name("bob"), 52.0).unwrap();
    gateway.submit_vote(id, &name("alice"), true).unwrap();
    let view = gateway.submit_vote(id, &name("bob"), false).unwrap();

    assert_eq!(view.status, DisputeStatus::Active);
    assert_eq!(view.rounds[0].result, Some(RoundResult::Rejected));
    assert!(view.settlement.is_none());

    let view = gateway.submit_bid(id, &name("alice"), 40.0).unwrap();
    assert_eq!(view.current_round, 2);

    let view = gateway.submit_bid(id, &name("bob"), 44.0).unwrap();
    assert_eq!(view.rounds[1].proposal, Some(42.0));
    gateway.submit_vote(id, &name("bob"), true).unwrap();
    let view = gateway.submit_vote(id, &name("alice"), true).unwrap();
    assert_eq!(view.settlement, Some(42.0));
}

// ─── Bound enforcement ───────────────────────────────────────────────

#[test]
fn effective_floor_is_private_value_over_public_offer() {
    let gateway = DisputeGateway::new();
    let id = gateway
        .create_dispute(name("alice"), name("bob"), 50.0, 10.0)
        .unwrap();
    gateway.submit_setup_value(id, &name("alice"), 20.0).unwrap();
    gateway.submit_setup_value(id, &name("bob"), 45.0).unwrap();

    let err = gateway.submit_bid(id, &name("alice"), 15.0).unwrap_err();
    assert_eq!(
        err,
        GatewayError::Dispute(DisputeError::BidOutOfRange {
            party: parley_protocol::Party::Claimant,
            amount: 15.0,
            min: 20.0,
            max: 50.0,
        })
    );

    // The effective floor itself is accepted.
    let view = gateway.submit_bid(id, &name("alice"), 20.0).unwrap();
    assert!(view.has_bid);
}

#[test]
fn rejected_bid_leaves_no_trace() {
    let (gateway, id) = active_session();
    let before = gateway.view(id, &name("bob")).unwrap();
    assert!(gateway.submit_bid(id, &name("bob"), 85.0).is_err());
    let after = gateway.view(id, &name("bob")).unwrap();
    assert_eq!(after, before);
}

// ─── Identity isolation ──────────────────────────────────────────────

#[test]
fn views_isolate_private_values() {
    let (gateway, id) = active_session();

    let alice = gateway.view(id, &name("alice")).unwrap();
    assert_eq!(alice.private_value, Some(20.0));
    assert_eq!(alice.bid_ceiling, Some(100.0), "claimant ceiling is the public claim");

    let bob = gateway.view(id, &name("bob")).unwrap();
    assert_eq!(bob.private_value, Some(80.0));
    assert_eq!(bob.bid_floor, Some(10.0), "respondent floor is the public offer");
}

// ─── Settled disputes are frozen ─────────────────────────────────────

#[test]
fn operations_after_settlement_are_no_ops() {
    let (gateway, id) = active_session();
    gateway.submit_bid(id, &name("alice"), 30.0).unwrap();
    gateway.submit_bid(id, &name("bob"), 50.0).unwrap();
    gateway.submit_vote(id, &name("alice"), true).unwrap();
    gateway.submit_vote(id, &name("bob"), true).unwrap();

    let frozen = gateway.view(id, &name("alice")).unwrap();
    assert_eq!(frozen.status, DisputeStatus::Settled);

    let view = gateway.submit_vote(id, &name("alice"), false).unwrap();
    assert_eq!(view, frozen);
    let view = gateway.submit_bid(id, &name("alice"), 25.0).unwrap();
    assert_eq!(view, frozen);
    let view = gateway.submit_vote(id, &name("bob"), false).unwrap();
    assert_eq!(view.status, DisputeStatus::Settled);
    assert_eq!(view.settlement, Some(40.0));
}

// ─── Wrong-phase votes ───────────────────────────────────────────────

#[test]
fn vote_before_any_round_is_rejected() {
    let (gateway, id) = active_session();
    let err = gateway.submit_vote(id, &name("alice"), true).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Dispute(DisputeError::NotVoting { .. })
    ));
}

#[test]
fn vote_during_bidding_is_rejected() {
    let (gateway, id) = active_session();
    gateway.submit_bid(id, &name("alice"), 30.0).unwrap();
    let err = gateway.submit_vote(id, &name("bob"), true).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Dispute(DisputeError::NotVoting { .. })
    ));
}

// ─── Per-dispute data separation ─────────────────────────────────────

#[test]
fn disputes_do_not_interfere() {
    let gateway = DisputeGateway::new();
    let first = gateway
        .create_dispute(name("alice"), name("bob"), 100.0, 10.0)
        .unwrap();
    let second = gateway
        .create_dispute(name("alice"), name("bob"), 500.0, 200.0)
        .unwrap();

    gateway.submit_setup_value(first, &name("alice"), 20.0).unwrap();
    gateway.submit_setup_value(first, &name("bob"), 80.0).unwrap();
    gateway.submit_bid(first, &name("alice"), 30.0).unwrap();

    let untouched = gateway.view(second, &name("alice")).unwrap();
    assert_eq!(untouched.status, DisputeStatus::Setup);
    assert!(untouched.rounds.is_empty());
}

// ─── Views serialize for the shell ───────────────────────────────────

#[test]
fn settled_view_serializes_for_the_shell() {
    let (gateway, id) = active_session();
    gateway.submit_bid(id, &name("alice"), 30.0).unwrap();
    gateway.submit_bid(id, &name("bob"), 50.0).unwrap();
    gateway.submit_vote(id, &name("alice"), true).unwrap();
    gateway.submit_vote(id, &name("bob"), true).unwrap();

    let view = gateway.view(id, &name("bob")).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["status"], "Settled");
    assert_eq!(json["settlement"], 40.0);
    assert_eq!(json["respondent"], "bob");
    // The counterparty's private floor never reaches the wire.
    assert_eq!(json["private_value"], 80.0);
    assert_eq!(json["rounds"][0]["proposal"], 40.0);
}

// ─── Concurrent submissions serialize per dispute ────────────────────

#[test]
fn racing_bids_both_land_exactly_once() {
    let (gateway, id) = active_session();

    let claimant_side = gateway.clone();
    let respondent_side = gateway.clone();
    let a = std::thread::spawn(move || {
        claimant_side.submit_bid(id, &name("alice"), 30.0).unwrap();
    });
    let b = std::thread::spawn(move || {
        respondent_side.submit_bid(id, &name("bob"), 50.0).unwrap();
    });
    a.join().unwrap();
    b.join().unwrap();

    // Whichever submission won the lock, both bids must be in the same
    // round and the crossing must have resolved exactly once.
    let view = gateway.view(id, &name("alice")).unwrap();
    assert_eq!(view.rounds.len(), 1);
    assert_eq!(view.rounds[0].status, RoundStatus::Voting);
    assert_eq!(view.rounds[0].proposal, Some(40.0));
}
