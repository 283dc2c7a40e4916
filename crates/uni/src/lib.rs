//! Facade crate for the uni build features and shared modules.
//! Re-exports domain/kernel primitives and the enabled feature crates.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `uni` with the desired feature flags (`define`/`webview`, both on by default).
//! - Call [`define::get_features`] for the build defines, or wrap an
//!   [`webview::AppService`] in a [`webview::WebInvokeDispatcher`].

pub use uni_domain as domain;
pub use uni_kernel as kernel;

#[cfg(feature = "define")]
pub use uni_define as define;
#[cfg(feature = "webview")]
pub use uni_webview as webview;

/// Feature registry for runtime introspection.
pub mod features {
    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "define")]
        "define",
        #[cfg(feature = "webview")]
        "webview",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::features;

    #[test]
    fn default_features_are_registered() {
        assert!(features::is_enabled("define"));
        assert!(features::is_enabled("webview"));
        assert!(!features::is_enabled("server"));
    }
}
