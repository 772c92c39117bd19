use super::*;

#[test]
fn active_only_on_exact_path() {
    assert!(is_active("/upload", "/upload"));
    assert!(!is_active("/upload/", "/upload"));
    assert!(!is_active("/", "/home"));
}

#[test]
fn every_link_is_absolute_and_unique() {
    let mut paths = NAV_LINKS.iter().map(|(p, _)| *p).collect::<Vec<_>>();
    assert!(paths.iter().all(|p| p.starts_with('/')));
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), NAV_LINKS.len());
}

#[test]
fn link_class_marks_active() {
    assert!(link_class(true).contains("--active"));
    assert!(!link_class(false).contains("--active"));
}
