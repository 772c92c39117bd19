use super::*;

fn names(records: &[&AssetRecord]) -> Vec<&'static str> {
    records.iter().map(|r| r.display_name).collect()
}

// =============================================================
// Seed
// =============================================================

#[test]
fn seed_has_six_records_with_previews_only_on_images() {
    let seed = seed_catalog();
    assert_eq!(seed.len(), 6);
    for record in &seed {
        assert_eq!(record.preview_url.is_some(), record.kind == AssetKind::Image, "{}", record.display_name);
    }
}

#[test]
fn seed_ids_are_unique() {
    let seed = seed_catalog();
    let mut ids = seed.iter().map(|r| r.id).collect::<Vec<_>>();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), seed.len());
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn logo_query_with_all_returns_logo_record() {
    let seed = seed_catalog();
    let hits = filter_assets(&seed, "logo", KindFilter::All);
    assert_eq!(names(&hits), vec!["Logo_Design_Final.png"]);
}

#[test]
fn pdf_query_returns_both_documents_in_order() {
    let seed = seed_catalog();
    let hits = filter_assets(&seed, "pdf", KindFilter::All);
    assert_eq!(names(&hits), vec!["Research_Paper_v2.pdf", "Legal_Contract_Draft.pdf"]);
}

#[test]
fn logo_query_with_document_filter_is_empty() {
    let seed = seed_catalog();
    assert!(filter_assets(&seed, "logo", KindFilter::Only(AssetKind::Document)).is_empty());
}

#[test]
fn empty_query_and_all_returns_everything_in_order() {
    let seed = seed_catalog();
    let hits = filter_assets(&seed, "", KindFilter::All);
    assert_eq!(hits.len(), seed.len());
    assert!(hits.iter().zip(&seed).all(|(hit, record)| *hit == record));
}

#[test]
fn query_matches_hash_case_insensitively() {
    let seed = seed_catalog();
    let hits = filter_assets(&seed, "0X3A24E9", KindFilter::All);
    assert_eq!(names(&hits), vec!["Research_Paper_v2.pdf"]);
}

#[test]
fn kind_filter_preserves_source_order() {
    let seed = seed_catalog();
    let hits = filter_assets(&seed, "", KindFilter::Only(AssetKind::Image));
    assert_eq!(
        names(&hits),
        vec!["Logo_Design_Final.png", "Product_Photography.jpg", "Project_Mockup_Final.png"]
    );
}

#[test]
fn filtering_is_idempotent() {
    let seed = seed_catalog();
    let first = filter_assets(&seed, "final", KindFilter::Only(AssetKind::Image));
    let owned = first.iter().map(|r| (*r).clone()).collect::<Vec<_>>();
    let second = filter_assets(&owned, "final", KindFilter::Only(AssetKind::Image));
    assert_eq!(names(&first), names(&second));
    assert_eq!(names(&first), vec!["Logo_Design_Final.png", "Project_Mockup_Final.png"]);
}

// =============================================================
// Filter parsing / empty state
// =============================================================

#[test]
fn kind_filter_parse_falls_back_to_all() {
    assert_eq!(KindFilter::parse("audio"), KindFilter::Only(AssetKind::Audio));
    assert_eq!(KindFilter::parse("all"), KindFilter::All);
    assert_eq!(KindFilter::parse("video"), KindFilter::All);
    assert_eq!(KindFilter::Only(AssetKind::Document).as_str(), "document");
}

#[test]
fn empty_state_distinguishes_no_match_from_no_assets() {
    let none_yet = empty_state_message("", KindFilter::All);
    let no_match = empty_state_message("xyz", KindFilter::All);
    let filtered = empty_state_message("", KindFilter::Only(AssetKind::Audio));
    assert_ne!(none_yet, no_match);
    assert_eq!(no_match, filtered);
}
