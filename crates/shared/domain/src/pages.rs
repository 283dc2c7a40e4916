//! Normalized `pages.json` model.
//!
//! Produced by the pages normalizer and consumed read-only by feature
//! resolution. Values the source does not state explicitly stay `None` so that
//! consumers can tell "unset" apart from "set to the default".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumString};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct PagesConfig {
    /// Main package pages first, then sub-package pages, in declaration order.
    pub pages: Vec<PageOptions>,
    pub global_style: PageStyle,
    pub tab_bar: Option<TabBar>,
    pub top_window: Option<WindowOptions>,
    pub left_window: Option<WindowOptions>,
    pub right_window: Option<WindowOptions>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct PageOptions {
    /// Page path relative to the input directory, without extension.
    pub path: String,
    pub style: PageStyle,
}

impl PageOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), style: PageStyle::default() }
    }

    #[must_use]
    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct PageStyle {
    pub enable_pull_down_refresh: bool,
    pub navigation_bar: NavigationBar,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct NavigationBar {
    pub style: Option<NavigationStyle>,
    #[serde(rename = "type")]
    pub kind: Option<NavigationBarType>,
    pub title_text: Option<String>,
    pub background_color: Option<String>,
    pub title_color: Option<String>,
    pub buttons: Vec<Value>,
    pub search_input: Option<Value>,
}

impl NavigationBar {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.style == Some(NavigationStyle::Custom)
    }

    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.kind == Some(NavigationBarType::Transparent)
    }

    #[must_use]
    pub fn has_buttons(&self) -> bool {
        !self.buttons.is_empty()
    }

    /// A search input counts only when it is configured with a truthy value.
    #[must_use]
    pub fn has_search_input(&self) -> bool {
        self.search_input.as_ref().is_some_and(is_truthy)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NavigationStyle {
    Default,
    Custom,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NavigationBarType {
    Default,
    Transparent,
    Float,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBar {
    pub list: Vec<Value>,
}

impl TabBar {
    #[must_use]
    pub fn has_items(&self) -> bool {
        !self.list.is_empty()
    }
}

/// Top, left or right window descriptor.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub path: String,
    pub style: Value,
}

impl WindowOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), style: Value::Null }
    }

    #[must_use]
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }
}

/// JavaScript-style truthiness of a JSON value.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
