//! # Feature Defines
//!
//! Derives the `__UNI_FEATURE_*__` compile-time constants of a build from the
//! project configuration, so the bundler can drop framework capabilities the
//! project never uses.
//!
//! ## Pipeline
//!
//! 1. **Manifest** ([`resolve_manifest_features`]): router mode and fixed API toggles.
//! 2. **Pages** ([`resolve_pages_features`]): multi-page, tab bar, windows, pull-down
//!    refresh; nvue and navigation bar trimming under `build` only.
//! 3. **Project** ([`resolve_project_features`]): reserved, currently empty.
//!
//! The three records are combined into a typed [`FeatureSet`]; call
//! [`FeatureSet::defines`] to obtain the ordered define map.
//!
//! Any read or parse failure aborts resolution: there is no partial feature set.

mod error;
pub mod pages_json;
pub mod resolve;

pub use crate::error::{DefineError, DefineErrorExt};
pub use crate::pages_json::normalize_pages_json;
pub use crate::resolve::{
    is_navigation_custom, nvue_marker_probe, resolve_manifest_features, resolve_pages_features,
    resolve_project_features,
};
pub use uni_kernel::domain::features::{DefineValue, FeatureDefines, FeatureSet};

use std::fs;
use std::path::Path;
use tracing::{debug, info};
use uni_kernel::domain::manifest::ManifestConfig;
use uni_kernel::domain::options::{BuildCommand, ProjectOptions};
use uni_kernel::domain::pages::PagesConfig;
use uni_kernel::jsonc::parse_jsonc;

/// Resolves every feature flag for one build of the project at `options.input_dir`.
///
/// # Errors
/// * [`DefineError::Read`] if `pages.json` or `manifest.json` cannot be read.
/// * [`DefineError::Parse`] if either file is not valid JSON-with-comments.
/// * [`DefineError::InvalidPages`] if `pages.json` has an unusable structure.
///
/// # Example
/// ```rust,no_run
/// use uni_define::get_features;
/// use uni_kernel::domain::options::{BuildCommand, Platform, ProjectOptions};
///
/// let options = ProjectOptions::new("src", Platform::H5);
/// let features = get_features(&options, BuildCommand::Build)?;
/// for (name, value) in features.defines().iter() {
///     println!("{name} = {value}");
/// }
/// # Ok::<(), uni_define::DefineError>(())
/// ```
pub fn get_features(
    options: &ProjectOptions,
    command: BuildCommand,
) -> Result<FeatureSet, DefineError> {
    info!(
        input_dir = %options.input_dir.display(),
        platform = %options.platform,
        %command,
        "Resolving build features"
    );

    let manifest = load_manifest(options)?;
    let pages = load_pages(options)?;

    let features = FeatureSet::new(
        resolve_manifest_features(&manifest),
        resolve_pages_features(&pages, command, nvue_marker_probe(options.input_dir())),
        resolve_project_features(options, command),
    );

    debug!(pages = pages.pages.len(), responsive = features.responsive(), "Features resolved");
    Ok(features)
}

/// Reads and parses `manifest.json`.
///
/// # Errors
/// [`DefineError::Read`] or [`DefineError::Parse`], with the file path as context.
pub fn load_manifest(options: &ProjectOptions) -> Result<ManifestConfig, DefineError> {
    let path = options.manifest_json_path();
    let text = read_project_file(&path)?;
    parse_jsonc::<ManifestConfig>(&text).context(path.display().to_string())
}

/// Reads `pages.json` and normalizes it for the target platform.
///
/// # Errors
/// [`DefineError::Read`], [`DefineError::Parse`] or [`DefineError::InvalidPages`].
pub fn load_pages(options: &ProjectOptions) -> Result<PagesConfig, DefineError> {
    let path = options.pages_json_path();
    let text = read_project_file(&path)?;
    normalize_pages_json(&text, options.platform).context(path.display().to_string())
}

fn read_project_file(path: &Path) -> Result<String, DefineError> {
    fs::read_to_string(path).context(path.display().to_string())
}
