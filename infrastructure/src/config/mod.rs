//! Configuration file loading for debate-host
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DEBATE_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./debate.toml` or `./.debate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/debate-host/config.toml`
//!    (fallback `~/.config/debate-host/config.toml`)
//! 5. Default values

mod file_config;
mod loader;
mod validation;

pub use file_config::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, FileConfig, FileDebateConfig,
    FileLlmConfig, FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileStorageConfig,
    data_dir, expand_home,
};
pub use loader::ConfigLoader;
pub use validation::{ConfigIssue, ConfigValidationError, Severity};
