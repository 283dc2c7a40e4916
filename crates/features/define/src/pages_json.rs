//! `pages.json` normalization.
//!
//! Turns the hand-written, platform-annotated configuration into the flat
//! [`PagesConfig`] the resolver works on:
//!
//! * sub-package pages are appended after the main pages with their `root` prefixed
//!   (`subPackages` wins over the `subpackages` alias when both are present);
//! * at least one page must remain after flattening;
//! * a style's platform block (e.g. `"h5": { ... }`) is merged over the base style;
//! * the flat `navigationBar*` keys and the `titleNView` object collapse into one
//!   [`NavigationBar`] record.

use crate::error::{DefineError, DefineErrorExt};
use serde_json::{Map, Value};
use tracing::trace;
use uni_kernel::domain::options::Platform;
use uni_kernel::domain::pages::{
    NavigationBar, NavigationStyle, PageOptions, PageStyle, PagesConfig, TabBar, WindowOptions,
    is_truthy,
};
use uni_kernel::jsonc::parse_jsonc;

const SUB_PACKAGE_KEYS: [&str; 2] = ["subPackages", "subpackages"];

/// Parses and normalizes `pages.json` text for `platform`.
///
/// # Errors
/// * [`DefineError::Parse`] when the text is not valid JSON-with-comments.
/// * [`DefineError::InvalidPages`] when `pages` or a page entry has the wrong shape.
pub fn normalize_pages_json(text: &str, platform: Platform) -> Result<PagesConfig, DefineError> {
    let root = parse_jsonc::<Value>(text).context("pages.json")?;
    normalize_pages_value(&root, platform)
}

/// Normalizes an already parsed `pages.json` document.
///
/// # Errors
/// Returns [`DefineError::InvalidPages`] when the document is not an object,
/// when `pages`/`subPackages` entries have the wrong shape, or when no page is
/// declared at all.
pub fn normalize_pages_value(root: &Value, platform: Platform) -> Result<PagesConfig, DefineError> {
    let Value::Object(root) = root else {
        return Err(invalid("document root must be an object"));
    };

    let mut pages = page_list(root.get("pages"), "", platform)?;
    let sub_packages_key =
        SUB_PACKAGE_KEYS.into_iter().find(|key| root.get(*key).is_some_and(|v| !v.is_null()));
    if let Some(key) = sub_packages_key {
        for package in array_field(root.get(key), key)? {
            let package_root = package.get("root").and_then(Value::as_str).unwrap_or_default();
            pages.extend(
                page_list(package.get("pages"), package_root, platform)
                    .context(format!("{key} root '{package_root}'"))?,
            );
        }
    }
    if pages.is_empty() {
        return Err(invalid("`pages` must contain at least one page"));
    }

    let config = PagesConfig {
        pages,
        global_style: normalize_style(root.get("globalStyle"), platform),
        tab_bar: root.get("tabBar").and_then(Value::as_object).map(|tab_bar| TabBar {
            list: tab_bar.get("list").and_then(Value::as_array).cloned().unwrap_or_default(),
        }),
        top_window: window(root.get("topWindow")),
        left_window: window(root.get("leftWindow")),
        right_window: window(root.get("rightWindow")),
    };

    trace!(pages = config.pages.len(), %platform, "normalized pages.json");
    Ok(config)
}

fn page_list(
    value: Option<&Value>,
    prefix: &str,
    platform: Platform,
) -> Result<Vec<PageOptions>, DefineError> {
    array_field(value, "pages")?
        .iter()
        .enumerate()
        .map(|(index, page)| -> Result<PageOptions, DefineError> {
            let path = page
                .get("path")
                .and_then(Value::as_str)
                .ok_or_else(|| invalid(format!("pages[{index}] has no string `path`")))?;

            Ok(PageOptions {
                path: join_page_path(prefix, path),
                style: normalize_style(page.get("style"), platform),
            })
        })
        .collect()
}

fn array_field<'a>(value: Option<&'a Value>, name: &str) -> Result<&'a [Value], DefineError> {
    match value {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(invalid(format!("`{name}` must be an array"))),
    }
}

fn join_page_path(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        path.to_owned()
    } else {
        format!("{prefix}/{}", path.trim_start_matches('/'))
    }
}

fn window(value: Option<&Value>) -> Option<WindowOptions> {
    let window = value?.as_object()?;
    Some(WindowOptions {
        path: window.get("path").and_then(Value::as_str).unwrap_or_default().to_owned(),
        style: window.get("style").cloned().unwrap_or(Value::Null),
    })
}

/// Normalizes a `globalStyle` or page `style` record.
#[must_use]
pub fn normalize_style(value: Option<&Value>, platform: Platform) -> PageStyle {
    let Some(Value::Object(base)) = value else {
        return PageStyle::default();
    };
    let style = with_platform_overrides(base, platform);

    PageStyle {
        enable_pull_down_refresh: style.get("enablePullDownRefresh").is_some_and(is_truthy),
        navigation_bar: navigation_bar(&style),
    }
}

fn with_platform_overrides(base: &Map<String, Value>, platform: Platform) -> Map<String, Value> {
    let mut merged = base.clone();
    if let Some(Value::Object(overrides)) = base.get(platform.style_key()) {
        for (key, value) in overrides {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

fn navigation_bar(style: &Map<String, Value>) -> NavigationBar {
    let text = |key: &str| style.get(key).and_then(Value::as_str).map(str::to_owned);

    let mut bar = NavigationBar {
        style: style.get("navigationStyle").and_then(Value::as_str).and_then(|s| s.parse().ok()),
        title_text: text("navigationBarTitleText"),
        background_color: text("navigationBarBackgroundColor"),
        title_color: text("navigationBarTextStyle").map(|s| text_style_color(&s)),
        ..NavigationBar::default()
    };

    match style.get("titleNView") {
        Some(Value::Bool(false)) => bar.style = Some(NavigationStyle::Custom),
        Some(Value::Object(view)) => {
            let view_text = |key: &str| view.get(key).and_then(Value::as_str).map(str::to_owned);

            bar.kind = view.get("type").and_then(Value::as_str).and_then(|s| s.parse().ok());
            bar.buttons = view.get("buttons").and_then(Value::as_array).cloned().unwrap_or_default();
            bar.search_input = view.get("searchInput").cloned();
            if let Some(title) = view_text("titleText") {
                bar.title_text = Some(title);
            }
            if let Some(color) = view_text("backgroundColor") {
                bar.background_color = Some(color);
            }
            if let Some(color) = view_text("titleColor") {
                bar.title_color = Some(color);
            }
        },
        _ => {},
    }

    bar
}

fn text_style_color(text_style: &str) -> String {
    match text_style {
        "black" => "#000000".to_owned(),
        "white" => "#ffffff".to_owned(),
        other => other.to_owned(),
    }
}

fn invalid(message: impl Into<std::borrow::Cow<'static, str>>) -> DefineError {
    DefineError::InvalidPages { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use uni_kernel::domain::pages::NavigationBarType;

    #[test]
    fn sub_packages_follow_main_pages() {
        let root = json!({
            "pages": [{ "path": "pages/index/index" }],
            "subPackages": [{ "root": "pkg-a/", "pages": [{ "path": "detail/detail" }] }]
        });

        let config = normalize_pages_value(&root, Platform::H5).unwrap();
        let paths: Vec<_> = config.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["pages/index/index", "pkg-a/detail/detail"]);
    }

    #[test]
    fn platform_block_overrides_base_style() {
        let style = json!({
            "navigationStyle": "default",
            "h5": { "navigationStyle": "custom" },
            "app-plus": { "enablePullDownRefresh": true }
        });

        let h5 = normalize_style(Some(&style), Platform::H5);
        assert_eq!(h5.navigation_bar.style, Some(NavigationStyle::Custom));
        assert!(!h5.enable_pull_down_refresh);

        let app = normalize_style(Some(&style), Platform::App);
        assert_eq!(app.navigation_bar.style, Some(NavigationStyle::Default));
        assert!(app.enable_pull_down_refresh);
    }

    #[test]
    fn title_n_view_collapses_into_navigation_bar() {
        let style = json!({
            "navigationBarTitleText": "Home",
            "navigationBarTextStyle": "white",
            "titleNView": {
                "type": "transparent",
                "buttons": [{ "text": "share" }],
                "searchInput": { "placeholder": "search" },
                "backgroundColor": "#007aff"
            }
        });

        let bar = normalize_style(Some(&style), Platform::H5).navigation_bar;
        assert_eq!(bar.kind, Some(NavigationBarType::Transparent));
        assert_eq!(bar.title_text.as_deref(), Some("Home"));
        assert_eq!(bar.title_color.as_deref(), Some("#ffffff"));
        assert_eq!(bar.background_color.as_deref(), Some("#007aff"));
        assert!(bar.has_buttons());
        assert!(bar.has_search_input());
        assert_eq!(bar.style, None);
    }

    #[test]
    fn title_n_view_false_means_custom() {
        let bar = normalize_style(Some(&json!({ "titleNView": false })), Platform::App);
        assert!(bar.navigation_bar.is_custom());
    }

    #[test]
    fn windows_and_tab_bar_are_optional() {
        let root = json!({
            "pages": [{ "path": "pages/index/index" }],
            "tabBar": { "color": "#333" },
            "topWindow": { "path": "windows/top" },
            "leftWindow": "not-an-object"
        });

        let config = normalize_pages_value(&root, Platform::H5).unwrap();
        assert_eq!(config.tab_bar.as_ref().map(TabBar::has_items), Some(false));
        assert_eq!(config.top_window.map(|w| w.path), Some("windows/top".to_owned()));
        assert!(config.left_window.is_none());
        assert!(config.right_window.is_none());
    }

    #[test]
    fn sub_packages_key_takes_precedence_over_alias() {
        let root = json!({
            "pages": [{ "path": "a" }],
            "subPackages": [{ "root": "x", "pages": [{ "path": "b" }] }],
            "subpackages": [{ "root": "y", "pages": [{ "path": "c" }] }]
        });

        let config = normalize_pages_value(&root, Platform::H5).unwrap();
        let paths: Vec<_> = config.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, ["a", "x/b"]);
    }

    #[test]
    fn lowercase_alias_is_used_alone() {
        let root = json!({
            "pages": [{ "path": "a" }],
            "subpackages": [{ "root": "y/", "pages": [{ "path": "c" }] }]
        });

        let config = normalize_pages_value(&root, Platform::H5).unwrap();
        assert_eq!(config.pages.last().map(|p| p.path.as_str()), Some("y/c"));
    }

    #[test]
    fn project_without_pages_is_rejected() {
        for text in ["{}", r#"{ "pages": [] }"#, r#"{ "pages": [], "subPackages": [] }"#] {
            let err = normalize_pages_json(text, Platform::H5).unwrap_err();
            assert!(matches!(err, DefineError::InvalidPages { .. }), "{text}");
            assert!(err.to_string().contains("at least one page"));
        }
    }

    #[test]
    fn sub_package_pages_alone_are_enough() {
        let root = json!({ "subPackages": [{ "root": "pkg", "pages": [{ "path": "only" }] }] });
        let config = normalize_pages_value(&root, Platform::H5).unwrap();
        assert_eq!(config.pages.len(), 1);
    }

    #[test]
    fn page_without_path_is_rejected() {
        let root = json!({ "pages": [{ "style": {} }] });
        let err = normalize_pages_value(&root, Platform::H5).unwrap_err();
        assert!(matches!(err, DefineError::InvalidPages { .. }));
    }

    #[test]
    fn pages_must_be_an_array() {
        let err = normalize_pages_json("{ pages: {} }", Platform::H5).unwrap_err();
        assert!(err.to_string().contains("`pages` must be an array"));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = normalize_pages_json("{ \"pages\": [", Platform::H5).unwrap_err();
        assert!(matches!(err, DefineError::Parse { .. }));
    }
}
