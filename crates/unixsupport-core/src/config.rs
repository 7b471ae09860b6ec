//! Support-layer configuration
//!
//! Compile-time defaults with runtime environment overrides.
//!
//! # Environment Variables (all optional)
//!
//! - `UXS_CLOEXEC_DEFAULT` - default close-on-exec for new handles (0/1)
//! - `UXS_ERROR_IDENTITY` - registry name of the OS error identity
//! - `UXS_LOG_LEVEL` - off, error, warn, info, debug, trace
//! - `UXS_FLUSH_EPRINT` - flush stderr after each log line (0/1)
//!
//! ```rust,ignore
//! use unixsupport_core::config::SupportConfig;
//!
//! SupportConfig::from_env()
//!     .cloexec_default(true)
//!     .apply()?;
//! ```

use std::str::FromStr;

use crate::cloexec;
use crate::error::ConfigError;
use crate::kprint::{self, LogLevel};

pub mod defaults {
    use crate::kprint::LogLevel;

    pub const CLOEXEC_DEFAULT: bool = false;
    pub const ERROR_IDENTITY: &str = "unix_error";
    pub const LOG_LEVEL: LogLevel = LogLevel::Warn;
    pub const FLUSH_EPRINT: bool = false;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportConfig {
    /// Process-wide close-on-exec default
    pub cloexec_default: bool,
    /// Name the error identity is registered under
    pub identity_name: String,
    pub log_level: LogLevel,
    pub flush_eprint: bool,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

fn env_flag(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(v) => matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

impl SupportConfig {
    /// Library defaults, no environment.
    pub fn new() -> Self {
        Self {
            cloexec_default: defaults::CLOEXEC_DEFAULT,
            identity_name: defaults::ERROR_IDENTITY.to_string(),
            log_level: defaults::LOG_LEVEL,
            flush_eprint: defaults::FLUSH_EPRINT,
        }
    }

    /// Defaults overridden by `UXS_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            cloexec_default: env_flag("UXS_CLOEXEC_DEFAULT", defaults::CLOEXEC_DEFAULT),
            identity_name: env_parse("UXS_ERROR_IDENTITY")
                .unwrap_or_else(|| defaults::ERROR_IDENTITY.to_string()),
            log_level: std::env::var("UXS_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(defaults::LOG_LEVEL),
            flush_eprint: env_flag("UXS_FLUSH_EPRINT", defaults::FLUSH_EPRINT),
        }
    }

    // Builder methods

    pub fn cloexec_default(mut self, cloexec: bool) -> Self {
        self.cloexec_default = cloexec;
        self
    }

    pub fn identity_name(mut self, name: impl Into<String>) -> Self {
        self.identity_name = name.into();
        self
    }

    pub fn log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn flush_eprint(mut self, enable: bool) -> Self {
        self.flush_eprint = enable;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.identity_name.is_empty() {
            return Err(ConfigError::InvalidValue("identity_name must not be empty"));
        }
        if self.identity_name.contains('\0') {
            return Err(ConfigError::InvalidValue("identity_name must not contain NUL"));
        }
        Ok(())
    }

    /// Publish the process-wide settings. Call once during startup,
    /// before other threads use this layer.
    pub fn apply(&self) -> Result<(), ConfigError> {
        self.validate()?;
        kprint::set_log_level(self.log_level);
        kprint::set_flush_enabled(self.flush_eprint);
        cloexec::set_cloexec_default(self.cloexec_default);
        crate::uinfo!(
            "unixsupport configured: cloexec_default={} identity={}",
            self.cloexec_default,
            self.identity_name
        );
        Ok(())
    }
}
