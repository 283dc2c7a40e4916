use serde_json::json;
use uni_domain::features::{
    DefineValue, FeatureSet, ManifestFeatures, PagesFeatures, RouterMode, UNI_FEATURE_NVUE,
    UNI_FEATURE_PAGES, UNI_FEATURE_RESPONSIVE, UNI_FEATURE_ROUTER_MODE, UNI_FEATURE_WX,
};

#[test]
fn defaults_match_include_everything_policy() {
    let manifest = ManifestFeatures::default();
    assert!(manifest.wx && manifest.wxs && manifest.longpress);
    assert!(!manifest.promise);
    assert_eq!(manifest.router_mode, RouterMode::Hash);

    let pages = PagesFeatures::default();
    assert!(pages.nvue && pages.pages && pages.tab_bar && pages.navigation_bar);
    assert!(!pages.top_window && !pages.left_window && !pages.right_window);
    assert!(!pages.pull_down_refresh);
}

#[test]
fn defines_always_carry_every_key_in_order() {
    let defines = FeatureSet::default().defines();
    let keys: Vec<_> = defines.iter().map(|(k, _)| k).collect();

    assert_eq!(defines.len(), 17);
    assert_eq!(keys.first(), Some(&UNI_FEATURE_WX));
    assert_eq!(keys.last(), Some(&"__UNI_FEATURE_NAVIGATIONBAR_TRANSPARENT__"));
    assert_eq!(defines.get(UNI_FEATURE_ROUTER_MODE), Some(DefineValue::Literal("\"hash\"")));
    assert_eq!(defines.get(UNI_FEATURE_NVUE), Some(DefineValue::Bool(true)));
}

#[test]
fn responsive_follows_any_window() {
    let mut set = FeatureSet::default();
    assert!(!set.responsive());

    set.pages.left_window = true;
    assert!(set.responsive());
    assert_eq!(set.defines().get(UNI_FEATURE_RESPONSIVE), Some(DefineValue::Bool(true)));
}

#[test]
fn defines_serialize_as_flat_object() {
    let mut set = FeatureSet::default();
    set.manifest.router_mode = RouterMode::History;
    set.pages.pages = false;

    let value = serde_json::to_value(set.defines()).expect("defines serialize");
    assert_eq!(value[UNI_FEATURE_ROUTER_MODE], json!("\"history\""));
    assert_eq!(value[UNI_FEATURE_PAGES], json!(false));
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(17));
}

#[test]
fn define_values_render_as_source_literals() {
    assert_eq!(DefineValue::Bool(false).to_string(), "false");
    assert_eq!(DefineValue::Literal(RouterMode::History.as_literal()).to_string(), "\"history\"");
    assert_eq!(DefineValue::Literal("\"hash\"").as_bool(), None);
}
