use felt::error::{LayoutError, PathError};
use felt::layout::{
    Container, Cta, FooterLink, LayoutConfig, LayoutConfigPatch, LayoutConfigRegistry,
    LayoutProps, LayoutProvider, NavbarProps, Tab,
};
use proptest::prelude::*;
use serde_json::json;

const CONTRIBUTORS: [&str; 4] = ["page", "modal", "banner", "table"];

#[derive(Debug, Clone)]
enum Step {
    /// Upsert `(contributor, hide_user, right_side)`.
    Set(usize, Option<bool>, Option<u8>),
    Remove(usize),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0..CONTRIBUTORS.len(), any::<Option<bool>>(), any::<Option<u8>>())
            .prop_map(|(who, hide, side)| Step::Set(who, hide, side)),
        1 => (0..CONTRIBUTORS.len()).prop_map(Step::Remove),
    ]
}

fn config_patch(hide_user: Option<bool>, right_side: Option<u8>) -> LayoutConfigPatch {
    let mut patch = LayoutConfigPatch::new();
    if let Some(hide) = hide_user {
        patch = patch.hide_user(hide);
    }
    if let Some(side) = right_side {
        patch = patch.navbar_right_side(format!("slot-{side}"));
    }
    patch
}

/// Plays `steps` against `registry` and returns the ordered model of entries.
fn play(
    registry: &LayoutConfigRegistry,
    steps: &[Step],
) -> Vec<(usize, Option<bool>, Option<u8>)> {
    let mut model: Vec<(usize, Option<bool>, Option<u8>)> = Vec::new();
    for step in steps {
        match *step {
            Step::Set(who, hide, side) => {
                registry.set(CONTRIBUTORS[who], config_patch(hide, side));
                match model.iter_mut().find(|(id, _, _)| *id == who) {
                    Some(entry) => *entry = (who, hide, side),
                    None => model.push((who, hide, side)),
                }
            }
            Step::Remove(who) => {
                registry.remove(CONTRIBUTORS[who]);
                model.retain(|(id, _, _)| *id != who);
            }
        }
    }
    model
}

// ============================================================================
// Layout Config (shallow patches)
// ============================================================================

#[test]
fn test_footer_links_override_round_trip() {
    let registry = LayoutConfigRegistry::new(LayoutConfig::default());
    assert_eq!(registry.effective().footer_links.len(), 0);

    let guard = registry.override_patch(
        "x",
        LayoutConfigPatch::new().footer_links(vec![FooterLink::new("Terms", "/terms")]),
    );
    assert_eq!(registry.effective().footer_links.len(), 1);
    assert_eq!(registry.effective().footer_links[0].label, "Terms");

    drop(guard);
    assert_eq!(registry.effective().footer_links.len(), 0);
}

#[test]
fn test_register_then_remove_restores_prior_value() {
    let base = LayoutConfig {
        navbar_tabs: vec![Tab::link("Lobby", "/"), Tab::link("Tournaments", "/tournaments")],
        hide_user: Some(false),
        ..Default::default()
    };
    let registry = LayoutConfigRegistry::new(base);
    let _banner = registry.override_patch("page", LayoutConfigPatch::new().overlay(true));
    let before = registry.effective();

    registry.set("modal", LayoutConfigPatch::new().hide_user(true).navbar_tabs(vec![]));
    assert_ne!(registry.effective(), before);

    registry.remove("modal");
    assert_eq!(registry.effective(), before);
}

#[test]
fn test_non_overlapping_patches_both_apply() {
    let registry = LayoutConfigRegistry::default();
    let _a = registry.override_patch(
        "a",
        LayoutConfigPatch::new().footer_links(vec![FooterLink::new("Terms", "/terms")]),
    );
    let _b = registry.override_patch("b", LayoutConfigPatch::new().navbar_right_side("wallet"));

    let effective = registry.effective();
    assert_eq!(effective.footer_links.len(), 1);
    assert_eq!(effective.navbar_right_side.as_deref(), Some("wallet"));
}

#[test]
fn test_overlapping_patches_later_wins() {
    let registry = LayoutConfigRegistry::default();
    let _a = registry.override_patch("a", LayoutConfigPatch::new().hide_user(false));
    let _b = registry.override_patch("b", LayoutConfigPatch::new().hide_user(true));

    assert_eq!(registry.effective().hide_user, Some(true));

    // updating the earlier contributor does not move it after the later one
    registry.set("a", LayoutConfigPatch::new().hide_user(false));
    assert_eq!(registry.effective().hide_user, Some(true));
}

#[test]
fn test_subscribers_see_override_changes() {
    let registry = LayoutConfigRegistry::default();
    let mut sub = registry.subscribe();

    let guard = registry.override_patch("a", LayoutConfigPatch::new().overlay(true));
    assert!(sub.try_recv());

    guard.remove();
    assert!(sub.try_recv());
    assert!(!sub.try_recv());
}

// ============================================================================
// Layout Props (path overrides)
// ============================================================================

#[test]
fn test_path_overrides_coexist() {
    let layout = LayoutProvider::new(LayoutProps {
        footer: Some(true),
        ..Default::default()
    });

    let _title = layout.override_prop("hero", "hero.title", "Sit & Go").unwrap();
    let _user = layout.override_prop("nav", "navbar.hideUser", true).unwrap();

    let props = layout.props();
    assert_eq!(props.hero.map(|h| h.title), Some("Sit & Go".to_string()));
    assert_eq!(props.navbar, Some(NavbarProps { hide_user: Some(true) }));
    assert_eq!(props.footer, Some(true));
}

#[test]
fn test_colliding_paths_later_wins() {
    let layout = LayoutProvider::default();
    let _a = layout.override_prop("a", "container", Container::Default).unwrap();
    let b = layout.override_prop("b", "container", Container::Large).unwrap();

    assert_eq!(layout.props().container, Some(Container::Large));

    drop(b);
    assert_eq!(layout.props().container, Some(Container::Default));
}

#[test]
fn test_update_layout_keeps_overrides() {
    let layout = LayoutProvider::default();
    let _guard = layout.override_prop("full", "isFullScreen", true).unwrap();

    layout.update_layout(LayoutProps {
        class_name: Some("table-view".into()),
        ..Default::default()
    });

    let props = layout.props();
    assert_eq!(props.class_name.as_deref(), Some("table-view"));
    assert!(props.is_full_screen());
    assert!(layout.base().is_full_screen.is_none());
}

#[test]
fn test_effective_container_defaults() {
    let layout = LayoutProvider::default();
    assert_eq!(layout.props().container, Some(Container::Default));
    assert_eq!(layout.base().container, None);
}

#[test]
fn test_huge_index_is_rejected() {
    let layout = LayoutProvider::default();

    assert!(matches!(
        layout.override_prop("x", "hero.ctas[18446744073709551615].label", "Join"),
        Err(LayoutError::Path(PathError::IndexTooLarge { .. }))
    ));
    assert!(matches!(
        layout.override_prop("x", "hero.ctas[4000000000].label", "Join"),
        Err(LayoutError::Path(PathError::IndexTooLarge { .. }))
    ));
    assert_eq!(layout.override_count(), 0);
    assert_eq!(layout.props().hero, None);
}

#[test]
fn test_sparse_cta_override_keeps_hero() {
    let layout = LayoutProvider::default();

    let _label = layout.override_prop("x", "hero.ctas[1].label", "Join").unwrap();
    let _href = layout.override_prop("y", "hero.ctas[1].href", "/join").unwrap();

    let hero = layout.props().hero.expect("hero is created by the override");
    assert_eq!(
        hero.ctas,
        vec![
            Cta::default(),
            Cta {
                label: "Join".into(),
                href: Some("/join".into()),
            },
        ]
    );
}

#[test]
fn test_invalid_paths_are_rejected() {
    let layout = LayoutProvider::default();

    assert!(matches!(
        layout.override_prop("a", "sidebar.open", true),
        Err(LayoutError::UnknownField(field)) if field == "sidebar"
    ));
    assert!(matches!(
        layout.override_prop("a", "hero..title", "x"),
        Err(LayoutError::Path(_))
    ));
    assert_eq!(layout.override_count(), 0);
}

#[test]
fn test_ill_typed_override_is_skipped() {
    let layout = LayoutProvider::new(LayoutProps {
        footer: Some(true),
        ..Default::default()
    });
    layout.set_override("bad", "footer", json!({ "nested": 1 })).unwrap();
    layout.set_override("good", "className", "dark").unwrap();

    let props = layout.props();
    assert_eq!(props.footer, Some(true));
    assert_eq!(props.class_name.as_deref(), Some("dark"));

    assert!(layout.remove_override("bad"));
    assert!(!layout.remove_override("bad"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The effective config equals folding the live patches over the base in
    /// first-registration order, so later contributors win on collisions.
    #[test]
    fn effective_matches_ordered_fold(steps in prop::collection::vec(arb_step(), 0..32)) {
        let base = LayoutConfig {
            hide_user: Some(false),
            ..Default::default()
        };
        let registry = LayoutConfigRegistry::new(base.clone());
        let model = play(&registry, &steps);

        let hide_user = model
            .iter()
            .rev()
            .find_map(|(_, hide, _)| *hide)
            .or(base.hide_user);
        let right_side = model
            .iter()
            .rev()
            .find_map(|(_, _, side)| *side)
            .map(|side| format!("slot-{side}"));

        let effective = registry.effective();
        prop_assert_eq!(effective.hide_user, hide_user);
        prop_assert_eq!(effective.navbar_right_side, right_side);
        prop_assert_eq!(
            registry.contributors(),
            model.iter().map(|(id, _, _)| CONTRIBUTORS[*id].to_string()).collect::<Vec<_>>()
        );
    }

    /// Registering a fresh contributor and removing it again restores the
    /// effective value exactly.
    #[test]
    fn register_then_remove_restores(
        steps in prop::collection::vec(arb_step(), 0..32),
        hide in any::<Option<bool>>(),
        side in any::<Option<u8>>(),
    ) {
        let registry = LayoutConfigRegistry::default();
        play(&registry, &steps);
        let before = registry.effective();

        let guard = registry.override_patch("extra", config_patch(hide, side));
        drop(guard);

        prop_assert_eq!(registry.effective(), before);
    }

    /// Path overrides on the same field resolve to the latest-registered
    /// contributor still mounted.
    #[test]
    fn colliding_path_overrides_later_wins(steps in prop::collection::vec(arb_step(), 0..32)) {
        let layout = LayoutProvider::default();
        let mut model: Vec<(usize, String)> = Vec::new();

        for step in &steps {
            match *step {
                Step::Set(who, _, side) => {
                    let class = format!("class-{}", side.unwrap_or_default());
                    layout.set_override(CONTRIBUTORS[who], "className", &class).unwrap();
                    match model.iter_mut().find(|(id, _)| *id == who) {
                        Some(entry) => entry.1 = class,
                        None => model.push((who, class)),
                    }
                }
                Step::Remove(who) => {
                    prop_assert_eq!(
                        layout.remove_override(CONTRIBUTORS[who]),
                        model.iter().any(|(id, _)| *id == who)
                    );
                    model.retain(|(id, _)| *id != who);
                }
            }
        }

        prop_assert_eq!(layout.props().class_name, model.last().map(|(_, class)| class.clone()));
        prop_assert_eq!(layout.override_count(), model.len());
    }
}
