use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parsed `manifest.json`. The document is open-shaped; only a few paths are read.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ManifestConfig(Value);

impl ManifestConfig {
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// `h5.router.mode`, when present and a string.
    #[must_use]
    pub fn router_mode(&self) -> Option<&str> {
        self.0.pointer("/h5/router/mode").and_then(Value::as_str)
    }
}

impl From<Value> for ManifestConfig {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
