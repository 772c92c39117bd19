use super::*;
use crate::net::ledger::SimulatedLedger;
use crate::state::asset::{AssetKind, BYTES_PER_MB, FileInfo};
use crate::state::workflow::Phase;
use crate::util::hex::is_prefixed_hex;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn five_mb_pdf_registers_with_forty_hex_hash() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = UploadSession::new();
    session.choose_kind(AssetKind::Document);
    session.offer_file(FileInfo::new("contract.pdf", 5 * BYTES_PER_MB, "application/pdf")).unwrap();

    let ticket = session.begin_submit().unwrap();
    assert_eq!(session.phase(), Phase::Submitting);

    let hash = SimulatedLedger::default().register(&mut rng).unwrap();
    assert!(session.complete(ticket, hash));

    assert_eq!(session.phase(), Phase::Completed);
    let hash = session.result_hash().unwrap();
    assert!(is_prefixed_hex(hash, 40), "{hash}");
}

#[test]
fn result_hash_absent_until_completed() {
    let mut session = UploadSession::new();
    assert_eq!(session.result_hash(), None);
    session.choose_kind(AssetKind::Audio);
    session.offer_file(FileInfo::new("song.mp3", BYTES_PER_MB, "audio/mpeg")).unwrap();
    session.begin_submit().unwrap();
    assert_eq!(session.result_hash(), None);
}

#[test]
fn failed_register_returns_to_file_selection() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut session = UploadSession::new();
    session.choose_kind(AssetKind::Image);
    session.offer_file(FileInfo::new("a.png", BYTES_PER_MB, "image/png")).unwrap();
    let ticket = session.begin_submit().unwrap();

    let ledger = SimulatedLedger { failure_rate: 1.0 };
    let err = ledger.register(&mut rng).unwrap_err();
    assert!(session.fail(ticket));
    assert_eq!(session.phase(), Phase::SelectingFile);
    assert_eq!(err.notice().title, "Upload failed");
}

#[test]
fn uploaded_notice_is_normal() {
    assert!(!uploaded_notice().is_destructive());
}
