use time::macros::date;

use super::*;

fn state() -> ProfileState {
    ProfileState::new(ProfileRecord::new(date!(2025 - 04 - 20), None))
}

// =============================================================
// Record
// =============================================================

#[test]
fn new_record_uses_zero_address_without_wallet() {
    let record = ProfileRecord::new(date!(2025 - 04 - 20), None);
    assert_eq!(record.wallet_address, ZERO_ADDRESS);
    assert_eq!(record.owned_asset_count, 0);
}

#[test]
fn placeholders_and_avatar_fallback() {
    let record = ProfileRecord::new(date!(2025 - 04 - 20), Some("0xabc"));
    assert_eq!(record.wallet_address, "0xabc");
    assert_eq!(record.name_or_placeholder(), "Unnamed Creator");
    assert_eq!(record.email_or_placeholder(), "No email added");
    assert_eq!(record.avatar_initial(), "U");
}

#[test]
fn avatar_initial_is_uppercased() {
    let mut record = ProfileRecord::new(date!(2025 - 04 - 20), None);
    record.display_name = "ada".to_owned();
    assert_eq!(record.avatar_initial(), "A");
}

// =============================================================
// Edit / save / cancel
// =============================================================

#[test]
fn save_commits_draft() {
    let mut s = state();
    s.begin_edit();
    s.set_draft_name("Ada".to_owned());
    s.set_draft_email("ada@example.com".to_owned());
    s.save();
    assert!(!s.is_editing());
    assert_eq!(s.committed().display_name, "Ada");
    assert_eq!(s.committed().email, "ada@example.com");
}

#[test]
fn cancel_restores_committed_record() {
    let mut s = state();
    s.toggle();
    s.set_draft_name("Ada".to_owned());
    s.toggle();

    s.begin_edit();
    s.set_draft_name("Grace".to_owned());
    s.cancel();
    assert!(!s.is_editing());
    assert_eq!(s.committed().display_name, "Ada");
    assert_eq!(s.draft(), s.committed());
}

#[test]
fn draft_edits_outside_edit_mode_are_ignored() {
    let mut s = state();
    s.set_draft_name("Ada".to_owned());
    assert_eq!(s.draft().display_name, "");
}

#[test]
fn sync_wallet_updates_both_copies() {
    let mut s = state();
    s.begin_edit();
    s.sync_wallet(Some("0xfeed"));
    assert_eq!(s.committed().wallet_address, "0xfeed");
    assert_eq!(s.draft().wallet_address, "0xfeed");
    s.sync_wallet(None);
    assert_eq!(s.committed().wallet_address, ZERO_ADDRESS);
}

// =============================================================
// Activity
// =============================================================

#[test]
fn only_transfers_carry_a_recipient() {
    for entry in seed_activity() {
        assert_eq!(entry.recipient.is_some(), entry.kind == ActivityKind::Transfer);
    }
}

#[test]
fn status_labels() {
    assert_eq!(ActivityStatus::Success.label(), "Successful");
    assert_eq!(ActivityStatus::Pending.label(), "Pending");
    assert_eq!(ActivityStatus::Failed.label(), "Failed");
}
