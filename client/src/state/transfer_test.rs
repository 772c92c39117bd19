use super::*;
use crate::net::ledger::SimulatedLedger;
use crate::util::hex::is_prefixed_hex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use time::macros::datetime;

fn filled(source: &str, recipient: &str) -> TransferSession {
    let mut session = TransferSession::new();
    session.set_source_hash(source);
    session.set_recipient(recipient);
    session
}

fn receipt() -> TransferReceipt {
    TransferReceipt { transaction_hash: "0xfeed".to_owned(), completed_at: datetime!(2025-04-08 16:45:00 UTC) }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_recipient_is_rejected() {
    let mut session = filled("0xabc", "");
    let err = session.begin_submit().unwrap_err();
    assert_eq!(err, WorkflowError::RecipientRequired);
    assert_eq!(err.notice("transfer").title, "Recipient ID required");
    assert_eq!(session.phase(), TransferPhase::Editing);
}

#[test]
fn blank_hash_is_reported_first() {
    let mut session = filled("   ", "");
    assert_eq!(session.begin_submit(), Err(WorkflowError::AssetHashRequired));
    assert_eq!(session.phase(), TransferPhase::Editing);
}

#[test]
fn whitespace_only_recipient_counts_as_blank() {
    let mut session = filled("0xabc", " \t ");
    assert_eq!(session.begin_submit(), Err(WorkflowError::RecipientRequired));
}

#[test]
fn field_errors_have_distinct_notices() {
    let a = WorkflowError::AssetHashRequired.notice("transfer");
    let b = WorkflowError::RecipientRequired.notice("transfer");
    assert_ne!(a.title, b.title);
    assert!(a.is_destructive() && b.is_destructive());
}

// =============================================================
// Submission
// =============================================================

#[test]
fn valid_inputs_submit_and_complete() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut session = filled("0xabc", "0x71C...93bA");
    let ticket = session.begin_submit().unwrap();
    assert_eq!(session.phase(), TransferPhase::Submitting);
    assert_eq!(session.transaction_hash(), None);

    let now = datetime!(2025-04-08 16:45:00 UTC);
    let receipt = SimulatedLedger::default().transfer(&mut rng, now).unwrap();
    assert!(session.complete(ticket, receipt));

    assert_eq!(session.phase(), TransferPhase::Completed);
    let tx = session.transaction_hash().unwrap();
    assert!(is_prefixed_hex(tx, 64), "{tx}");
    assert_eq!(session.receipt().unwrap().completed_at, now);
    assert_eq!(session.source_hash(), "0xabc");
    assert_eq!(session.recipient(), "0x71C...93bA");
}

#[test]
fn inputs_are_frozen_while_submitting() {
    let mut session = filled("0xabc", "bob");
    session.begin_submit().unwrap();
    session.set_recipient("mallory");
    assert_eq!(session.recipient(), "bob");
    assert_eq!(session.begin_submit(), Err(WorkflowError::AlreadySubmitting));
}

#[test]
fn failure_returns_to_editing_with_inputs() {
    let mut session = filled("0xabc", "bob");
    let ticket = session.begin_submit().unwrap();
    assert!(session.fail(ticket));
    assert_eq!(session.phase(), TransferPhase::Editing);
    assert_eq!(session.source_hash(), "0xabc");
    assert_eq!(session.recipient(), "bob");
}

#[test]
fn stale_ticket_is_ignored() {
    let mut session = filled("0xabc", "bob");
    let ticket = session.begin_submit().unwrap();
    assert!(!session.complete(ticket + 1, receipt()));
    assert_eq!(session.phase(), TransferPhase::Submitting);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn start_another_clears_all_fields() {
    let mut session = filled("0xabc", "bob");
    let ticket = session.begin_submit().unwrap();
    session.complete(ticket, receipt());
    session.start_another();
    assert_eq!(session.phase(), TransferPhase::Editing);
    assert_eq!(session.source_hash(), "");
    assert_eq!(session.recipient(), "");
    assert_eq!(session.receipt(), None);
}

#[test]
fn completion_from_before_reset_is_dropped() {
    let mut session = filled("0xabc", "bob");
    let ticket = session.begin_submit().unwrap();
    session.fail(ticket);
    session.start_another();
    assert!(!session.complete(ticket, receipt()));
    assert_eq!(session.phase(), TransferPhase::Editing);
}
