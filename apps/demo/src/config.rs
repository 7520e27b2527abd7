use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`XACC__LOGGING__LEVEL=debug`).
pub const ENV_PREFIX: &str = "XACC";

/// Base name of the configuration file looked up when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "xacc-demo";

/// Custom error type for config loading.
#[xacc_derive::xacc_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub logging: LoggingConfig,
    pub sample: SampleConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug`, `trace` or `off`.
    pub level: String,
    /// Extra filter directives, e.g. `xacc_namespace=trace`.
    pub filter: Option<String>,
    pub console: bool,
    /// Rolling file output is enabled when set.
    pub directory: Option<PathBuf>,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None, console: true, directory: None, json: false }
    }
}

/// The array the demo wraps and the scaling it applies.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    pub values: Vec<f64>,
    pub unit: String,
    pub factor: f64,
    pub target_unit: String,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            values: vec![1.5, 4.0, 2.5, 8.0],
            unit: "m".to_owned(),
            factor: 100.0,
            target_unit: "cm".to_owned(),
        }
    }
}

/// Loads configuration from a TOML file layered under environment overrides.
///
/// 1. **Base File**: `path` when given (must exist), otherwise an optional
///    `xacc-demo.toml` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `XACC__`, nested with
///    double underscores (`XACC__SAMPLE__UNIT` maps to `sample.unit`).
///
/// Missing keys fall back to the type's `Default`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if an explicit file is missing or the merged
/// settings do not deserialize into `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (effective_path, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let builder = Config::builder()
        .add_source(
            File::from(effective_path.as_path()).format(FileFormat::Toml).required(required),
        )
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
