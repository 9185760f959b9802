use crate::core::domain::GasPrice;
use crate::core::errors::{Result, SendTokenError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Env var naming a TOML config file, used when no path is passed explicitly.
pub const CONFIG_PATH_ENV: &str = "SEND_TOKEN_CONFIG";
/// Env var overriding `submission.slow_warning_secs`.
pub const SLOW_SUBMIT_WARN_ENV: &str = "SEND_TOKEN_SLOW_SUBMIT_WARN_SECS";

/// Submission configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Interval after which a still-running executor call is logged as slow
    /// (seconds). The call itself is never cancelled.
    #[serde(default = "SubmissionConfig::default_slow_warning_secs")]
    pub slow_warning_secs: u64,

    /// Artificial latency for the dry-run executor (milliseconds)
    #[serde(default)]
    pub dry_run_latency_ms: u64,
}

impl SubmissionConfig {
    fn default_slow_warning_secs() -> u64 { 30 }

    pub fn slow_warning(&self) -> Duration {
        Duration::from_secs(self.slow_warning_secs)
    }

    pub fn dry_run_latency(&self) -> Duration {
        Duration::from_millis(self.dry_run_latency_ms)
    }
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self { slow_warning_secs: Self::default_slow_warning_secs(), dry_run_latency_ms: 0 }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "LoggingConfig::default_filter")]
    pub filter: String,
}

impl LoggingConfig {
    fn default_filter() -> String { "info".to_string() }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: Self::default_filter() }
    }
}

/// Initial values for a fresh form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub gas_price: Option<GasPrice>,
}

/// send-token configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendTokenConfig {
    #[serde(default)]
    pub submission: SubmissionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub defaults: FormDefaults,
}

impl SendTokenConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Resolve the effective configuration.
    ///
    /// Order: explicit `path`, then `SEND_TOKEN_CONFIG`, then built-in
    /// defaults. `SEND_TOKEN_SLOW_SUBMIT_WARN_SECS` is applied last.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let mut config = match path.map(Path::to_path_buf).or(from_env) {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config file");
                Self::from_file(&p)?
            }
            None => Self::default(),
        };

        if let Ok(raw) = std::env::var(SLOW_SUBMIT_WARN_ENV) {
            config.submission.slow_warning_secs = raw.trim().parse().map_err(|_| {
                SendTokenError::Config(format!("{} must be a whole number of seconds, got {:?}", SLOW_SUBMIT_WARN_ENV, raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.submission.slow_warning_secs == 0 {
            return Err(SendTokenError::Config(
                "submission.slow_warning_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| SendTokenError::Config(format!("failed to render config: {}", e)))
    }
}
