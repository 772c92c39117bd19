use super::*;

const MB: u64 = crate::state::asset::BYTES_PER_MB;

fn pdf(mb: u64) -> FileInfo {
    FileInfo::new("contract.pdf", mb * MB, "application/pdf")
}

fn png(mb: u64) -> FileInfo {
    FileInfo::new("photo.png", mb * MB, "image/png")
}

fn with_document_held() -> FileWorkflow<String> {
    let mut wf = FileWorkflow::new();
    wf.choose_kind(AssetKind::Document);
    wf.offer_file(pdf(5)).unwrap();
    wf
}

// =============================================================
// Initial shape
// =============================================================

#[test]
fn starts_selecting_kind_with_nothing_held() {
    let wf = FileWorkflow::<String>::new();
    assert_eq!(wf.phase(), Phase::SelectingKind);
    assert_eq!(wf.kind(), None);
    assert_eq!(wf.file(), None);
    assert_eq!(wf.result(), None);
    assert!(!wf.can_submit());
}

// =============================================================
// Kind selection
// =============================================================

#[test]
fn choosing_kind_moves_to_selecting_file() {
    let mut wf = FileWorkflow::<String>::new();
    wf.choose_kind(AssetKind::Audio);
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.kind(), Some(AssetKind::Audio));
}

#[test]
fn changing_kind_clears_held_file() {
    let mut wf = with_document_held();
    wf.choose_kind(AssetKind::Image);
    assert_eq!(wf.kind(), Some(AssetKind::Image));
    assert_eq!(wf.file(), None);
}

#[test]
fn file_cannot_be_offered_before_kind() {
    let mut wf = FileWorkflow::<String>::new();
    assert_eq!(wf.offer_file(pdf(1)), Err(WorkflowError::NoKindSelected));
    assert_eq!(wf.file(), None);
}

#[test]
fn clear_kind_returns_to_picker() {
    let mut wf = with_document_held();
    wf.clear_kind();
    assert_eq!(wf, FileWorkflow::<String>::new());
}

// =============================================================
// File guard
// =============================================================

#[test]
fn oversized_image_is_rejected_and_phase_stays() {
    let mut wf = FileWorkflow::<String>::new();
    wf.choose_kind(AssetKind::Image);
    let err = wf.offer_file(png(15)).unwrap_err();
    assert_eq!(err, WorkflowError::Rejected(FileRejection::TooLarge { max_mb: 10 }));
    assert_eq!(err.notice("upload").title, "File too large");
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.file(), None);
}

#[test]
fn rejected_file_keeps_previously_accepted_one() {
    let mut wf = with_document_held();
    assert!(wf.offer_file(png(1)).is_err());
    assert_eq!(wf.file(), Some(&pdf(5)));
}

#[test]
fn accepted_file_replaces_held_file() {
    let mut wf = with_document_held();
    let other = FileInfo::new("other.pdf", MB, "application/pdf");
    wf.offer_file(other.clone()).unwrap();
    assert_eq!(wf.file(), Some(&other));
}

#[test]
fn clear_file_drops_selection() {
    let mut wf = with_document_held();
    wf.clear_file();
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.file(), None);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn submit_without_file_is_rejected() {
    let mut wf = FileWorkflow::<String>::new();
    assert_eq!(wf.begin_submit(), Err(WorkflowError::NoFileSelected));
    wf.choose_kind(AssetKind::Document);
    assert_eq!(wf.begin_submit(), Err(WorkflowError::NoFileSelected));
    assert_eq!(wf.phase(), Phase::SelectingFile);
    let notice = WorkflowError::NoFileSelected.notice("upload");
    assert_eq!(notice.title, "No file selected");
    assert_eq!(notice.description.as_deref(), Some("Please select a file to upload."));
}

#[test]
fn accepted_pdf_submits_then_completes() {
    let mut wf = with_document_held();
    let ticket = wf.begin_submit().unwrap();
    assert_eq!(wf.phase(), Phase::Submitting);
    assert!(wf.is_submitting());
    assert_eq!(wf.result(), None);

    assert!(wf.complete(ticket, "0xabc".to_owned()));
    assert_eq!(wf.phase(), Phase::Completed);
    assert_eq!(wf.result().map(String::as_str), Some("0xabc"));
    assert_eq!(wf.file(), Some(&pdf(5)));
}

#[test]
fn reentrant_submit_is_rejected() {
    let mut wf = with_document_held();
    wf.begin_submit().unwrap();
    assert_eq!(wf.begin_submit(), Err(WorkflowError::AlreadySubmitting));
    assert_eq!(wf.offer_file(pdf(1)), Err(WorkflowError::AlreadySubmitting));
}

#[test]
fn failure_returns_to_selecting_file_with_file_kept() {
    let mut wf = with_document_held();
    let ticket = wf.begin_submit().unwrap();
    assert!(wf.fail(ticket));
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.file(), Some(&pdf(5)));
    assert!(wf.can_submit());
}

#[test]
fn stale_completion_after_kind_change_is_dropped() {
    let mut wf = with_document_held();
    let ticket = wf.begin_submit().unwrap();
    wf.choose_kind(AssetKind::Audio);
    assert!(!wf.complete(ticket, "0xdead".to_owned()));
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.result(), None);
}

#[test]
fn stale_ticket_from_earlier_submission_is_dropped() {
    let mut wf = with_document_held();
    let first = wf.begin_submit().unwrap();
    assert!(wf.fail(first));
    let second = wf.begin_submit().unwrap();
    assert!(!wf.complete(first, "0xold".to_owned()));
    assert!(wf.complete(second, "0xnew".to_owned()));
    assert_eq!(wf.result().map(String::as_str), Some("0xnew"));
}

#[test]
fn completed_workflow_rejects_new_files_and_submits() {
    let mut wf = with_document_held();
    let ticket = wf.begin_submit().unwrap();
    wf.complete(ticket, "0x1".to_owned());
    assert_eq!(wf.offer_file(pdf(1)), Err(WorkflowError::AlreadyCompleted));
    assert_eq!(wf.begin_submit(), Err(WorkflowError::AlreadyCompleted));
}

#[test]
fn screen_follows_phase() {
    let mut wf = FileWorkflow::<String>::new();
    assert_eq!(wf.screen(), Screen::KindPicker);
    wf.choose_kind(AssetKind::Document);
    assert_eq!(wf.screen(), Screen::FilePicker(AssetKind::Document));
    wf.offer_file(pdf(1)).unwrap();
    let ticket = wf.begin_submit().unwrap();
    assert_eq!(wf.screen(), Screen::FilePicker(AssetKind::Document));
    wf.complete(ticket, "0x1".to_owned());
    assert_eq!(wf.screen(), Screen::Result);
}

// =============================================================
// Resets
// =============================================================

#[test]
fn start_another_keeps_kind_and_clears_file_and_result() {
    let mut wf = with_document_held();
    let ticket = wf.begin_submit().unwrap();
    wf.complete(ticket, "0x1".to_owned());
    wf.start_another();
    assert_eq!(wf.phase(), Phase::SelectingFile);
    assert_eq!(wf.kind(), Some(AssetKind::Document));
    assert_eq!(wf.file(), None);
    assert_eq!(wf.result(), None);
}

#[test]
fn repeated_resets_reach_the_same_shape() {
    let mut wf = with_document_held();
    for _ in 0..3 {
        let ticket = wf.begin_submit().unwrap();
        wf.complete(ticket, "0x1".to_owned());
        wf.start_another();
        assert_eq!(wf.phase(), Phase::SelectingFile);
        assert_eq!(wf.file(), None);
        assert_eq!(wf.result(), None);
        wf.offer_file(pdf(2)).unwrap();
    }
    wf.clear_kind();
    assert_eq!(wf.phase(), Phase::SelectingKind);
    assert_eq!(wf.kind(), None);
    assert_eq!(wf.file(), None);
    assert_eq!(wf.result(), None);
}

#[test]
fn start_another_outside_completed_is_noop() {
    let mut wf = with_document_held();
    let before = wf.clone();
    wf.start_another();
    assert_eq!(wf, before);
}
