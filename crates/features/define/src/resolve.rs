//! The three feature resolution steps.
//!
//! Each step works on already parsed input so it can be exercised without a
//! project on disk; [`crate::get_features`] wires them to the real files.

use std::path::Path;
use tracing::{debug, warn};
use uni_kernel::domain::features::{ManifestFeatures, PagesFeatures, ProjectFeatures, RouterMode};
use uni_kernel::domain::manifest::ManifestConfig;
use uni_kernel::domain::options::{BuildCommand, ProjectOptions};
use uni_kernel::domain::pages::{NavigationStyle, PageOptions, PagesConfig};

/// Name of the marker file that flags a page as an nvue page.
pub const NVUE_MARKER: &str = ".nvue";

/// Flags controlled by `manifest.json`. Independent of the build command.
#[must_use]
pub fn resolve_manifest_features(manifest: &ManifestConfig) -> ManifestFeatures {
    let mut features = ManifestFeatures::default();

    if manifest.router_mode() == Some("history") {
        features.router_mode = RouterMode::History;
    }

    debug!(?features, "resolved manifest features");
    features
}

/// Flags detected from the normalized pages configuration.
///
/// nvue and navigation bar detection only run for [`BuildCommand::Build`]; during
/// development those flags keep their "include everything" defaults.
/// `has_nvue` reports whether a page ships an nvue variant.
pub fn resolve_pages_features<F>(
    config: &PagesConfig,
    command: BuildCommand,
    has_nvue: F,
) -> PagesFeatures
where
    F: Fn(&PageOptions) -> bool,
{
    let mut features = PagesFeatures::default();
    let pages = &config.pages;

    if pages.is_empty() {
        warn!("pages.json declares no pages; the project is treated as multi-page");
    }
    if pages.len() == 1 {
        features.pages = false;
    }
    if !config.tab_bar.as_ref().is_some_and(|tab_bar| tab_bar.has_items()) {
        features.tab_bar = false;
    }

    features.top_window = config.top_window.as_ref().is_some_and(|w| w.has_path());
    features.left_window = config.left_window.as_ref().is_some_and(|w| w.has_path());
    features.right_window = config.right_window.as_ref().is_some_and(|w| w.has_path());

    features.pull_down_refresh = config.global_style.enable_pull_down_refresh
        || pages.iter().any(|page| page.style.enable_pull_down_refresh);

    if command.is_build() {
        if !pages.iter().any(has_nvue) {
            features.nvue = false;
        }
        resolve_navigation_bar(config, &mut features);
    }

    debug!(?features, %command, "resolved pages features");
    features
}

fn resolve_navigation_bar(config: &PagesConfig, features: &mut PagesFeatures) {
    if is_navigation_custom(config) {
        features.navigation_bar = false;
        features.navigation_bar_buttons = false;
        features.navigation_bar_search_input = false;
        features.navigation_bar_transparent = false;
        return;
    }

    let global = &config.global_style.navigation_bar;
    let bars = || config.pages.iter().map(|page| &page.style.navigation_bar);

    if !bars().any(|bar| bar.has_buttons()) {
        features.navigation_bar_buttons = false;
    }
    if !global.has_search_input() && !bars().any(|bar| bar.has_search_input()) {
        features.navigation_bar_search_input = false;
    }
    if !global.is_transparent() && !bars().any(|bar| bar.is_transparent()) {
        features.navigation_bar_transparent = false;
    }
}

/// Whether no page renders the built-in navigation bar.
///
/// A custom global style holds unless a page explicitly asks for `default`;
/// otherwise every page has to opt into `custom` itself.
#[must_use]
pub fn is_navigation_custom(config: &PagesConfig) -> bool {
    let mut bars = config.pages.iter().map(|page| &page.style.navigation_bar);

    if config.global_style.navigation_bar.is_custom() {
        !bars.any(|bar| bar.style == Some(NavigationStyle::Default))
    } else {
        bars.all(|bar| bar.is_custom())
    }
}

/// Per-project toggles. Nothing is resolved yet, in any mode.
#[must_use]
pub const fn resolve_project_features(
    _options: &ProjectOptions,
    _command: BuildCommand,
) -> ProjectFeatures {
    ProjectFeatures {}
}

/// Probe that looks for `<input_dir>/<page path>/.nvue`.
pub fn nvue_marker_probe(input_dir: &Path) -> impl Fn(&PageOptions) -> bool + '_ {
    move |page: &PageOptions| input_dir.join(&page.path).join(NVUE_MARKER).exists()
}
