use super::*;
use crate::util::hex::is_prefixed_hex;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn now() -> OffsetDateTime {
    datetime!(2025-05-01 09:30:00 UTC)
}

#[test]
fn register_mints_twenty_byte_hash() {
    let mut rng = StdRng::seed_from_u64(5);
    let hash = SimulatedLedger::default().register(&mut rng).unwrap();
    assert!(is_prefixed_hex(&hash, 40), "{hash}");
}

#[test]
fn transfer_mints_thirty_two_byte_hash() {
    let mut rng = StdRng::seed_from_u64(5);
    let receipt = SimulatedLedger::default().transfer(&mut rng, now()).unwrap();
    assert!(is_prefixed_hex(&receipt.transaction_hash, 64));
    assert_eq!(receipt.completed_at, now());
}

#[test]
fn default_ledger_never_fails() {
    let mut rng = StdRng::seed_from_u64(9);
    let ledger = SimulatedLedger::default();
    for _ in 0..100 {
        assert!(ledger.register(&mut rng).is_ok());
        assert!(ledger.verify(&mut rng, now()).is_ok());
        assert!(ledger.transfer(&mut rng, now()).is_ok());
    }
}

#[test]
fn always_failing_ledger_reports_operation() {
    let mut rng = StdRng::seed_from_u64(9);
    let ledger = SimulatedLedger { failure_rate: 1.0 };
    assert_eq!(ledger.register(&mut rng), Err(LedgerError::Simulated { operation: Operation::Upload }));
    assert_eq!(
        ledger.verify(&mut rng, now()),
        Err(LedgerError::Simulated { operation: Operation::Verify })
    );
    assert_eq!(
        ledger.transfer(&mut rng, now()),
        Err(LedgerError::Simulated { operation: Operation::Transfer })
    );
}

#[test]
fn verify_draws_every_outcome() {
    let mut rng = StdRng::seed_from_u64(42);
    let ledger = SimulatedLedger::default();
    let mut seen = [false; 3];
    for _ in 0..200 {
        let verdict = ledger.verify(&mut rng, now()).unwrap();
        let idx = Outcome::ALL.iter().position(|o| *o == verdict.outcome()).unwrap();
        seen[idx] = true;
    }
    assert_eq!(seen, [true, true, true]);
}

#[test]
fn authentic_details_use_mock_registry_values() {
    let mut rng = StdRng::seed_from_u64(42);
    let ledger = SimulatedLedger::default();
    let details = std::iter::repeat_with(|| ledger.verify(&mut rng, now()).unwrap())
        .find_map(|v| v.details().cloned())
        .unwrap();
    assert_eq!(details.owner, MOCK_OWNER);
    assert_eq!(details.registered_at, MOCK_REGISTERED_AT);
    assert_eq!(details.last_verified_at, now());
}

#[test]
fn failure_notices_name_the_operation() {
    let titles = [Operation::Upload, Operation::Verify, Operation::Transfer]
        .map(|operation| LedgerError::Simulated { operation }.notice().title);
    assert_eq!(titles, ["Upload failed", "Verification failed", "Transfer failed"]);
}

#[test]
fn settle_completes_immediately_off_browser() {
    futures::executor::block_on(settle(UPLOAD_LATENCY_MS));
}
