use super::*;

fn state() -> Rc<PageState> {
    let content = SiteContent::parse(SITE_JSON).unwrap();
    Rc::new(PageState::new(Rc::new(content)))
}

// =============================================================
// Content
// =============================================================

#[test]
fn embedded_content_parses() {
    let content = SiteContent::parse(SITE_JSON).unwrap();
    assert_eq!(content.projects.len(), 4);
    assert_eq!(content.info.len(), 2);
    assert_eq!(content.projects[0].kind, "Consumer Audio");
}

#[test]
fn missing_optional_fields_default() {
    let raw = r#"{ "projects": [{
        "id": "x", "title": "T", "type": "Study", "description": "d",
        "image_url": "u", "x": 1, "y": 2
    }] }"#;
    let content = SiteContent::parse(raw).unwrap();
    let p = &content.projects[0];
    assert_eq!(p.rotation, 0.0);
    assert_eq!(p.scale, None);
    assert_eq!(p.scale_or_default(), 1.0);
    assert!(content.info.is_empty());
    assert!(content.motion.is_none());
}

#[test]
fn info_content_accepts_text_or_list() {
    let content = SiteContent::parse(SITE_JSON).unwrap();
    assert!(matches!(content.info_item("about").unwrap().content, InfoContent::Text(_)));
    assert!(matches!(content.info_item("toolkit").unwrap().content, InfoContent::List(ref l) if l.len() == 8));
}

#[test]
fn malformed_content_is_an_error() {
    let err = SiteContent::parse(r#"{ "projects": [{ "id": 3 }] }"#).unwrap_err();
    assert!(matches!(err, Error::Content(_)));
}

#[test]
fn motion_overrides_are_read() {
    let content = SiteContent::parse(r#"{ "motion": { "drag": { "power": 0.3 } } }"#).unwrap();
    assert_eq!(content.motion.unwrap().drag.power, 0.3);
}

#[test]
fn unknown_lookup_is_an_error() {
    let content = SiteContent::parse(SITE_JSON).unwrap();
    assert!(matches!(content.project("99"), Err(Error::UnknownProject(id)) if id == "99"));
    assert!(matches!(content.info_item("nope"), Err(Error::UnknownInfo(_))));
}

// =============================================================
// Overlay slot
// =============================================================

#[test]
fn starts_without_overlay() {
    assert!(state().overlay.is_none());
}

#[test]
fn view_sets_overlay_and_backdrop_clears_it() {
    let s = state().reduce(PageAction::OpenProject("02".into()));
    assert_eq!(s.overlay.as_ref().map(Overlay::id), Some("02"));
    let s = s.reduce(PageAction::CloseOverlay);
    assert!(s.overlay.is_none());
}

#[test]
fn second_selection_replaces_first() {
    let s = state()
        .reduce(PageAction::OpenProject("01".into()))
        .reduce(PageAction::OpenInfo("toolkit".into()));
    match &s.overlay {
        Some(Overlay::Info(i)) => assert_eq!(i.id, "toolkit"),
        other => panic!("unexpected overlay {other:?}"),
    }
    let s = s.reduce(PageAction::OpenProject("03".into()));
    assert!(matches!(&s.overlay, Some(Overlay::Project(p)) if p.id == "03"));
}

#[test]
fn unknown_selection_keeps_current_overlay() {
    let s = state().reduce(PageAction::OpenProject("01".into()));
    let same = s.clone().reduce(PageAction::OpenProject("missing".into()));
    assert!(Rc::ptr_eq(&s, &same));
}

#[test]
fn closing_nothing_is_a_no_op() {
    let s = state();
    let same = s.clone().reduce(PageAction::CloseOverlay);
    assert!(Rc::ptr_eq(&s, &same));
}

// =============================================================
// Layout reset
// =============================================================

#[test]
fn reset_changes_every_item_key() {
    let s = state();
    let names = ["hero-text", "hero-card", "01", "decor-1"];
    let before: Vec<String> = names.iter().map(|n| s.item_key(n)).collect();
    let s = s.reduce(PageAction::ResetLayout);
    for (name, old) in names.iter().zip(&before) {
        assert_ne!(&s.item_key(name), old);
    }
    assert_eq!(s.item_key("01"), "01-1");
}

#[test]
fn reset_leaves_overlay_alone() {
    let s = state()
        .reduce(PageAction::OpenProject("04".into()))
        .reduce(PageAction::ResetLayout);
    assert!(s.overlay.is_some());
    assert_eq!(s.layout_key, 1);
}
