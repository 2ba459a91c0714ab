use super::*;

#[test]
fn push_replaces_current_and_increments_id() {
    let mut notices = NoticeState::default();
    let first = notices.success("Saved");
    let second = notices.error("Failed");
    assert_eq!(second, first + 1);
    let current = notices.current.clone().unwrap();
    assert_eq!(current.level, NoticeLevel::Error);
    assert_eq!(current.message, "Failed");
}

#[test]
fn dismiss_ignores_stale_ids() {
    let mut notices = NoticeState::default();
    let old = notices.info("one");
    let new = notices.info("two");
    notices.dismiss(old);
    assert_eq!(notices.current.as_ref().map(|n| n.id), Some(new));
    notices.dismiss(new);
    assert!(notices.current.is_none());
}

#[test]
fn level_css_modifiers_are_distinct() {
    assert_ne!(NoticeLevel::Info.css_modifier(), NoticeLevel::Success.css_modifier());
    assert_ne!(NoticeLevel::Success.css_modifier(), NoticeLevel::Error.css_modifier());
}
