use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Operations embedded web content may ask the host application to perform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum InvocationName {
    NavigateTo,
    NavigateBack,
    SwitchTab,
    ReLaunch,
    RedirectTo,
    PostMessage,
}

/// One inbound web-invoke message: `{ "name": ..., "arg": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    pub name: InvocationName,
    /// Forwarded to the application service as-is.
    #[serde(default)]
    pub arg: Value,
}

impl InvocationRequest {
    #[must_use]
    pub const fn new(name: InvocationName, arg: Value) -> Self {
        Self { name, arg }
    }
}

/// Page(s) the message originated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageTarget {
    Single(u64),
    Many(Vec<u64>),
}

impl PageTarget {
    #[must_use]
    pub fn ids(&self) -> &[u64] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }
}

impl From<u64> for PageTarget {
    fn from(id: u64) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<u64>> for PageTarget {
    fn from(ids: Vec<u64>) -> Self {
        Self::Many(ids)
    }
}
