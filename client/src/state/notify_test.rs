use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotificationState::default();
    let a = state.push(Notice::info("one"));
    let b = state.push(Notice::info("two"));
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].notice.title, "two");
}

#[test]
fn push_evicts_oldest_past_cap() {
    let mut state = NotificationState::default();
    for i in 0..5 {
        state.push(Notice::info(format!("n{i}")));
    }
    assert_eq!(state.items.len(), MAX_VISIBLE);
    let titles = state.items.iter().map(|t| t.notice.title.as_str()).collect::<Vec<_>>();
    assert_eq!(titles, vec!["n2", "n3", "n4"]);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationState::default();
    let a = state.push(Notice::info("a"));
    let b = state.push(Notice::info("b"));
    state.dismiss(a);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = NotificationState::default();
    state.push(Notice::info("a"));
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn destructive_notice_carries_description() {
    let notice = Notice::destructive("File too large", "Maximum file size is 10MB.");
    assert!(notice.is_destructive());
    assert_eq!(notice.description.as_deref(), Some("Maximum file size is 10MB."));
}

#[test]
fn info_notice_is_normal_without_description() {
    let notice = Notice::info("Hash copied to clipboard");
    assert_eq!(notice.severity, Severity::Normal);
    assert!(notice.description.is_none());
}
