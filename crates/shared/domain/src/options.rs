use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// File name of the pages configuration inside the input directory.
pub const PAGES_JSON: &str = "pages.json";
/// File name of the application manifest inside the input directory.
pub const MANIFEST_JSON: &str = "manifest.json";

/// Compilation target of a build.
#[derive(
    Debug,
    Default,
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Platform {
    #[default]
    H5,
    App,
    MpWeixin,
    MpAlipay,
    MpBaidu,
    MpToutiao,
    MpQq,
}

impl Platform {
    /// Key under which `pages.json` style records carry overrides for this platform.
    #[must_use]
    pub fn style_key(self) -> &'static str {
        match self {
            Self::H5 => "h5",
            Self::App => "app-plus",
            Self::MpWeixin => "mp-weixin",
            Self::MpAlipay => "mp-alipay",
            Self::MpBaidu => "mp-baidu",
            Self::MpToutiao => "mp-toutiao",
            Self::MpQq => "mp-qq",
        }
    }
}

/// Mode the bundler runs in. Only [`BuildCommand::Build`] enables exact feature trimming.
#[derive(
    Debug,
    Default,
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BuildCommand {
    #[default]
    Serve,
    Build,
}

impl BuildCommand {
    #[must_use]
    pub const fn is_build(self) -> bool {
        matches!(self, Self::Build)
    }
}

/// Project-level options the build is invoked with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectOptions {
    /// Root of the project sources; `pages.json` and `manifest.json` live here.
    pub input_dir: PathBuf,
    pub platform: Platform,
}

impl Default for ProjectOptions {
    fn default() -> Self {
        Self { input_dir: PathBuf::from("."), platform: Platform::default() }
    }
}

impl ProjectOptions {
    pub fn new(input_dir: impl Into<PathBuf>, platform: Platform) -> Self {
        Self { input_dir: input_dir.into(), platform }
    }

    #[must_use]
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    #[must_use]
    pub fn pages_json_path(&self) -> PathBuf {
        self.input_dir.join(PAGES_JSON)
    }

    #[must_use]
    pub fn manifest_json_path(&self) -> PathBuf {
        self.input_dir.join(MANIFEST_JSON)
    }
}
