//! Build-time feature records and their rendering as bundler defines.
//!
//! Each resolution step owns one record with its own named fields, so the
//! merged [`FeatureSet`] cannot contain colliding keys.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum_macros::{AsRefStr, EnumString};

pub const UNI_FEATURE_WX: &str = "__UNI_FEATURE_WX__";
pub const UNI_FEATURE_WXS: &str = "__UNI_FEATURE_WXS__";
pub const UNI_FEATURE_PROMISE: &str = "__UNI_FEATURE_PROMISE__";
pub const UNI_FEATURE_LONGPRESS: &str = "__UNI_FEATURE_LONGPRESS__";
pub const UNI_FEATURE_NVUE: &str = "__UNI_FEATURE_NVUE__";
pub const UNI_FEATURE_ROUTER_MODE: &str = "__UNI_FEATURE_ROUTER_MODE__";
pub const UNI_FEATURE_PAGES: &str = "__UNI_FEATURE_PAGES__";
pub const UNI_FEATURE_TABBAR: &str = "__UNI_FEATURE_TABBAR__";
pub const UNI_FEATURE_TOPWINDOW: &str = "__UNI_FEATURE_TOPWINDOW__";
pub const UNI_FEATURE_LEFTWINDOW: &str = "__UNI_FEATURE_LEFTWINDOW__";
pub const UNI_FEATURE_RIGHTWINDOW: &str = "__UNI_FEATURE_RIGHTWINDOW__";
pub const UNI_FEATURE_RESPONSIVE: &str = "__UNI_FEATURE_RESPONSIVE__";
pub const UNI_FEATURE_NAVIGATIONBAR: &str = "__UNI_FEATURE_NAVIGATIONBAR__";
pub const UNI_FEATURE_PULL_DOWN_REFRESH: &str = "__UNI_FEATURE_PULL_DOWN_REFRESH__";
pub const UNI_FEATURE_NAVIGATIONBAR_BUTTONS: &str = "__UNI_FEATURE_NAVIGATIONBAR_BUTTONS__";
pub const UNI_FEATURE_NAVIGATIONBAR_SEARCHINPUT: &str = "__UNI_FEATURE_NAVIGATIONBAR_SEARCHINPUT__";
pub const UNI_FEATURE_NAVIGATIONBAR_TRANSPARENT: &str =
    "__UNI_FEATURE_NAVIGATIONBAR_TRANSPARENT__";

/// Router implementation the H5 runtime is built with.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RouterMode {
    #[default]
    Hash,
    History,
}

impl RouterMode {
    /// The mode as a quoted JavaScript string literal, ready for define substitution.
    #[must_use]
    pub const fn as_literal(self) -> &'static str {
        match self {
            Self::Hash => "\"hash\"",
            Self::History => "\"history\"",
        }
    }
}

/// Flags driven by `manifest.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestFeatures {
    /// Mini-program style component instance APIs (`selectComponent`, ...).
    pub wx: bool,
    /// WXS support (`getComponentDescriptor`, ...).
    pub wxs: bool,
    /// Legacy `[err, res]` promise results.
    pub promise: bool,
    pub longpress: bool,
    pub router_mode: RouterMode,
}

impl Default for ManifestFeatures {
    fn default() -> Self {
        Self { wx: true, wxs: true, promise: false, longpress: true, router_mode: RouterMode::Hash }
    }
}

/// Flags detected from the normalized pages configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesFeatures {
    pub nvue: bool,
    /// More than one page (multi-page routing).
    pub pages: bool,
    pub tab_bar: bool,
    pub top_window: bool,
    pub left_window: bool,
    pub right_window: bool,
    pub navigation_bar: bool,
    pub pull_down_refresh: bool,
    pub navigation_bar_buttons: bool,
    pub navigation_bar_search_input: bool,
    pub navigation_bar_transparent: bool,
}

impl Default for PagesFeatures {
    fn default() -> Self {
        Self {
            nvue: true,
            pages: true,
            tab_bar: true,
            top_window: false,
            left_window: false,
            right_window: false,
            navigation_bar: true,
            pull_down_refresh: false,
            navigation_bar_buttons: true,
            navigation_bar_search_input: true,
            navigation_bar_transparent: true,
        }
    }
}

/// Per-project toggles. No flags are defined yet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFeatures {}

/// Every feature flag of one build, grouped by the step that resolved it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub manifest: ManifestFeatures,
    pub pages: PagesFeatures,
    pub project: ProjectFeatures,
}

impl FeatureSet {
    #[must_use]
    pub const fn new(
        manifest: ManifestFeatures,
        pages: PagesFeatures,
        project: ProjectFeatures,
    ) -> Self {
        Self { manifest, pages, project }
    }

    /// Any of the top, left or right windows is configured.
    #[must_use]
    pub const fn responsive(&self) -> bool {
        self.pages.top_window || self.pages.left_window || self.pages.right_window
    }

    /// Renders the flags as the global constants substituted by the bundler.
    ///
    /// Every key is always present, in a fixed order.
    #[must_use]
    pub fn defines(&self) -> FeatureDefines {
        let m = &self.manifest;
        let p = &self.pages;

        FeatureDefines(vec![
            (UNI_FEATURE_WX, DefineValue::Bool(m.wx)),
            (UNI_FEATURE_WXS, DefineValue::Bool(m.wxs)),
            (UNI_FEATURE_PROMISE, DefineValue::Bool(m.promise)),
            (UNI_FEATURE_LONGPRESS, DefineValue::Bool(m.longpress)),
            (UNI_FEATURE_NVUE, DefineValue::Bool(p.nvue)),
            (UNI_FEATURE_ROUTER_MODE, DefineValue::Literal(m.router_mode.as_literal())),
            (UNI_FEATURE_PAGES, DefineValue::Bool(p.pages)),
            (UNI_FEATURE_TABBAR, DefineValue::Bool(p.tab_bar)),
            (UNI_FEATURE_TOPWINDOW, DefineValue::Bool(p.top_window)),
            (UNI_FEATURE_LEFTWINDOW, DefineValue::Bool(p.left_window)),
            (UNI_FEATURE_RIGHTWINDOW, DefineValue::Bool(p.right_window)),
            (UNI_FEATURE_RESPONSIVE, DefineValue::Bool(self.responsive())),
            (UNI_FEATURE_NAVIGATIONBAR, DefineValue::Bool(p.navigation_bar)),
            (UNI_FEATURE_PULL_DOWN_REFRESH, DefineValue::Bool(p.pull_down_refresh)),
            (UNI_FEATURE_NAVIGATIONBAR_BUTTONS, DefineValue::Bool(p.navigation_bar_buttons)),
            (
                UNI_FEATURE_NAVIGATIONBAR_SEARCHINPUT,
                DefineValue::Bool(p.navigation_bar_search_input),
            ),
            (UNI_FEATURE_NAVIGATIONBAR_TRANSPARENT, DefineValue::Bool(p.navigation_bar_transparent)),
        ])
    }
}

/// Value of one define: a boolean or a fixed, already-quoted source literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefineValue {
    Bool(bool),
    Literal(&'static str),
}

impl DefineValue {
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for DefineValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Literal(s) => f.write_str(s),
        }
    }
}

impl Serialize for DefineValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Literal(s) => serializer.serialize_str(s),
        }
    }
}

/// Ordered define map. Serializes as a flat object keyed by define name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDefines(Vec<(&'static str, DefineValue)>);

impl FeatureDefines {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<DefineValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, DefineValue)> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for FeatureDefines {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
