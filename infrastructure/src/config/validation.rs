//! Configuration validation issues
//!
//! Validation never aborts on the first problem: [`FileConfig::validate`]
//! collects every issue so they can be reported together.
//!
//! [`FileConfig::validate`]: super::FileConfig::validate

use thiserror::Error;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a default is used instead.
    Warning,
}

/// What is wrong with a configuration value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("debate.default_rounds must be 3, 5 or 7 (got {0}), using 3")]
    InvalidRoundCount(u32),

    #[error("llm.model cannot be empty")]
    EmptyModelName,

    #[error("llm.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("llm.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("llm.temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f32),
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub error: ConfigValidationError,
}

impl ConfigIssue {
    pub fn error(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Error,
            error,
        }
    }

    pub fn warning(error: ConfigValidationError) -> Self {
        Self {
            severity: Severity::Warning,
            error,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.error)
    }
}
