//! Configuration management
//!
//! Settings are loaded from environment variables with defaults; command-line
//! flags override them afterwards.
//!
//! # Environment Variables
//!
//! - `APISCAN_LOG_LEVEL`: trace|debug|info|warn|error - default: "info"
//! - `APISCAN_LOG_JSON`: emit JSON log lines (true|false) - default: "false"
//! - `APISCAN_DEFAULT_STAGE`: stage name reported when a template sets none - default: "Prod"
//! - `APISCAN_WORKING_DIR`: base directory for relative route-definition files - default: unset
//!
//! # Example
//!
//! ```no_run
//! use apiscan::ApiscanConfig;
//!
//! let config = ApiscanConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_STAGE_NAME: &str = "Prod";
const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiscanConfig {
    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,

    pub log_json: bool,

    /// Stage name used when the template declares none
    pub default_stage: String,

    /// Base directory for relative route-definition files
    pub working_dir: Option<PathBuf>,
}

impl Default for ApiscanConfig {
    /// Loads from `APISCAN_*` environment variables, falling back to defaults
    fn default() -> Self {
        let log_level = env::var("APISCAN_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        let log_json = env::var("APISCAN_LOG_JSON")
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(false);

        let default_stage =
            env::var("APISCAN_DEFAULT_STAGE").unwrap_or_else(|_| DEFAULT_STAGE_NAME.to_string());

        let working_dir = env::var("APISCAN_WORKING_DIR")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self {
            log_level,
            log_json,
            default_stage,
            working_dir,
        }
    }
}

impl ApiscanConfig {
    /// Checks that the log level is known and the default stage is non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed(format!(
                "Invalid log level: {}. Valid options: {}",
                self.log_level,
                VALID_LOG_LEVELS.join(", ")
            )));
        }

        if self.default_stage.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Default stage name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into().to_lowercase();
        self
    }
}

impl fmt::Display for ApiscanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Apiscan Configuration:")?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        writeln!(f, "  JSON Logs: {}", self.log_json)?;
        writeln!(f, "  Default Stage: {}", self.default_stage)?;
        match &self.working_dir {
            Some(dir) => writeln!(f, "  Working Dir: {}", dir.display())?,
            None => writeln!(f, "  Working Dir: (template directory)")?,
        }
        Ok(())
    }
}
