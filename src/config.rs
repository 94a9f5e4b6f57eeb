//! Configuration management for the RAX FTP client
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! environment variables prefixed `RAX_FTP_CLIENT_` (nested keys joined by
//! `__`, e.g. `RAX_FTP_CLIENT_SESSION__PASSIVE_MODE=epsv`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::client::{ContinuationMode, ReplyQuirks};
use crate::transfer::PassiveModeKind;

/// Complete client configuration
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct ClientConfig {
    pub session: SessionConfig,
    pub target: TargetConfig,
}

/// How a control session talks to the server
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    /// Port appended to addresses given without one
    pub default_port: u16,

    /// Upper bound on dialing the data connection
    pub data_connect_timeout_secs: u64,

    /// `pasv` or `epsv`
    pub passive_mode: PassiveModeKind,

    /// `absorb` reads whole multi-line replies, `first_line` stops after the first
    pub continuation: ContinuationMode,

    /// Lines read past an indented reply line before decoding; 0 disables
    pub indented_reply_extra_lines: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_port: 21,
            data_connect_timeout_secs: 30,
            passive_mode: PassiveModeKind::Pasv,
            continuation: ContinuationMode::Absorb,
            indented_reply_extra_lines: 2,
        }
    }
}

impl SessionConfig {
    /// Get data connection timeout as Duration
    pub fn data_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.data_connect_timeout_secs)
    }

    pub fn reply_quirks(&self) -> ReplyQuirks {
        ReplyQuirks {
            continuation: self.continuation,
            indented_extra_lines: self.indented_reply_extra_lines,
        }
    }
}

/// Server and account used by the command-line client
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TargetConfig {
    pub address: String,
    pub username: String,
    pub password: String,
    /// Directory to list; empty lists the login directory
    pub list_path: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:21".to_string(),
            username: "anonymous".to_string(),
            password: "anonymous@".to_string(),
            list_path: String::new(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from ./config.toml (if present) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from `path` (if present) with environment overrides
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("RAX_FTP_CLIENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session.default_port == 0 {
            return Err(ConfigError::Message("default_port cannot be 0".into()));
        }

        if self.session.data_connect_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "data_connect_timeout_secs must be greater than 0".into(),
            ));
        }

        if self.target.address.trim().is_empty() {
            return Err(ConfigError::Message("target address cannot be empty".into()));
        }

        Ok(())
    }
}
