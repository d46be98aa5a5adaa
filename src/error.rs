//! Unified error types for the bridge.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// NavigateError
// ---------------------------------------------------------------------------

/// Errors raised while handing a navigation target to the host.
///
/// These are always caught at the launch call site and converted into status
/// text; they never abort the remaining launch sequence.
#[derive(Debug)]
pub enum NavigateError {
    /// The host opener process could not be spawned or exited non-zero.
    Spawn(std::io::Error),
    /// The target URI was structurally unusable (e.g. no `scheme://` prefix).
    MalformedTarget(String),
}

impl fmt::Display for NavigateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "opener failed: {e}"),
            Self::MalformedTarget(uri) => write!(f, "malformed navigation target: {uri}"),
        }
    }
}

impl std::error::Error for NavigateError {}

impl From<std::io::Error> for NavigateError {
    fn from(e: std::io::Error) -> Self {
        Self::Spawn(e)
    }
}

// ---------------------------------------------------------------------------
// BridgeError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the CLI harness.
#[derive(Debug)]
pub enum BridgeError {
    Config(ConfigError),
    Io(std::io::Error),
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<ConfigError> for BridgeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
