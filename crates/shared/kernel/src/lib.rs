//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config layering and JSON-with-comments parsing.
//!
//! ## Config loading
//! ```rust,ignore
//! use uni_kernel::config::load_config;
//! use uni_kernel::domain::options::ProjectOptions;
//!
//! let options: ProjectOptions = load_config(None::<&str>).unwrap_or_default();
//! ```
//!
//! ## JSONC
//! ```rust
//! use uni_kernel::jsonc::parse_jsonc;
//!
//! let value: serde_json::Value = parse_jsonc("{ /* pages */ \"pages\": [], }").unwrap();
//! assert!(value["pages"].is_array());
//! ```

pub mod config;
pub mod jsonc;

pub use uni_domain as domain;
