use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Base name of the config file looked up when no path is given (`uni.toml`, `uni.json`, ...).
pub const DEFAULT_CONFIG_NAME: &str = "uni";
/// Prefix of environment overrides (`UNI__PLATFORM=app`).
pub const ENV_PREFIX: &str = "UNI";

/// Custom error type for config loading.
#[uni_derive::uni_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration by layering a file source and environment overrides.
///
/// 1. **File**: `path` when given (must exist), otherwise an optional `uni.*`
///    file in the current directory. The format follows the file extension.
/// 2. **Environment**: variables prefixed with `UNI__`; nested keys are separated
///    by double underscores (e.g. `UNI__INPUT_DIR` maps to `input_dir`).
///
/// # Errors
/// * An explicitly given file does not exist or cannot be parsed.
/// * The merged values do not match the shape of `T`.
///
/// # Example
/// ```rust,ignore
/// use uni_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Options {
///     platform: String,
/// }
///
/// let cfg: Options = load_config(Some("config/uni.toml")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_NAME), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    if required {
        info!("Loading config from {}", effective_path.display());
    } else {
        debug!("Looking for optional config {}.*", effective_path.display());
    }

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
