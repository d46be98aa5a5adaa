//! Bridge configuration: data model, defaults, and the loading pipeline.
//!
//! Loading is parameterized over its file/env/home sources so precedence and
//! validation behavior can be unit-tested without touching the real
//! filesystem.

use serde::Deserialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Embedded default `applink.toml` template written by `applink init`.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("templates/applink.toml");
/// Default target scheme used when no config file is present.
const DEFAULT_SCHEME: &str = "exampleapp://open";
/// Default target package for intent-style URIs.
const DEFAULT_PACKAGE: &str = "com.example.app";
/// Delay before the first automatic launch attempt.
const DEFAULT_LAUNCH_DELAY_MS: u64 = 300;
/// Delay before the manual control is revealed.
const DEFAULT_FALLBACK_DELAY_MS: u64 = 2000;
/// Upper bound on configured delays. Anything longer is a config typo.
const MAX_DELAY_MS: u64 = 60_000;

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Primary launch strategy for the automatic attempt.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LaunchStrategy {
    /// `intent://` composite URI, routed straight to the target package.
    #[default]
    Intent,
    /// Hidden embedded sub-document pointed at the raw deep link.
    Frame,
}

/// Immutable launch configuration, constructed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Base URI template for the target app; may embed its own query.
    pub scheme: String,
    /// Package identifier embedded in intent-style URIs.
    pub package: String,
    pub launch_delay_ms: u64,
    pub fallback_delay_ms: u64,
    pub strategy: LaunchStrategy,
    /// Enables diagnostic output on the reporter's debug channel.
    pub debug: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            package: DEFAULT_PACKAGE.to_string(),
            launch_delay_ms: DEFAULT_LAUNCH_DELAY_MS,
            fallback_delay_ms: DEFAULT_FALLBACK_DELAY_MS,
            strategy: LaunchStrategy::Intent,
            debug: false,
        }
    }
}

impl BridgeConfig {
    pub fn launch_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.launch_delay_ms)
    }

    pub fn fallback_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.fallback_delay_ms)
    }
}

/// On-disk config shape. Every field is optional; omissions fall back to the
/// compiled defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    scheme: Option<String>,
    package: Option<String>,
    launch_delay_ms: Option<u64>,
    fallback_delay_ms: Option<u64>,
    strategy: Option<LaunchStrategy>,
    debug: Option<bool>,
}

impl FileConfig {
    fn apply(self, config: &mut BridgeConfig) {
        if let Some(scheme) = self.scheme {
            config.scheme = scheme;
        }
        if let Some(package) = self.package {
            config.package = package;
        }
        if let Some(ms) = self.launch_delay_ms {
            config.launch_delay_ms = ms;
        }
        if let Some(ms) = self.fallback_delay_ms {
            config.fallback_delay_ms = ms;
        }
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(debug) = self.debug {
            config.debug = debug;
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`). Without
/// it the loader tries `./applink.toml`, then the per-user config file, and
/// finally falls back to compiled defaults.
pub fn load_config(path_override: Option<&str>) -> Result<BridgeConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        default_global_config_path,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    global_path: FRoot,
) -> Result<BridgeConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut config = BridgeConfig::default();

    if let Some(text) = read_config_text(path_override, &read_file, &global_path)? {
        let parsed: FileConfig = toml::from_str(&text)?;
        parsed.apply(&mut config);
    }

    if let Some(scheme) = env_lookup("APPLINK_SCHEME") {
        config.scheme = scheme;
    }
    if let Some(package) = env_lookup("APPLINK_PACKAGE") {
        config.package = package;
    }

    validate(&config)?;
    Ok(config)
}

/// Read the first config source that exists.
///
/// An explicit `--config` path must exist; its read errors propagate. The
/// implicit locations are optional and skipped when missing.
fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    global_path: &FRoot,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(explicit) = path_override {
        return Ok(Some(read_file(Path::new(explicit))?));
    }

    for candidate in implicit_config_paths(global_path) {
        match read_file(&candidate) {
            Ok(text) => return Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(None)
}

fn implicit_config_paths<FRoot>(global_path: &FRoot) -> Vec<PathBuf>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    let mut paths = vec![PathBuf::from("applink.toml")];
    if let Some(global) = global_path() {
        paths.push(global);
    }
    paths
}

fn validate(config: &BridgeConfig) -> Result<(), ConfigError> {
    if !config.scheme.contains("://") {
        return Err(ConfigError::Invalid(format!(
            "scheme `{}` is missing a `://` separator",
            config.scheme
        )));
    }
    if config.strategy == LaunchStrategy::Intent && config.package.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "intent strategy requires a non-empty package".to_string(),
        ));
    }
    for (name, value) in [
        ("launch_delay_ms", config.launch_delay_ms),
        ("fallback_delay_ms", config.fallback_delay_ms),
    ] {
        if value > MAX_DELAY_MS {
            return Err(ConfigError::Invalid(format!(
                "{name} = {value} exceeds the {MAX_DELAY_MS} ms ceiling"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Init
// ---------------------------------------------------------------------------

/// Per-user config path (`~/.config/applink/applink.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("applink").join("applink.toml"))
}

/// Outcome of `applink init`.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Write the default config template to `path`.
///
/// Uses create-new semantics so concurrent bootstraps cannot clobber a file
/// another process just wrote.
pub fn initialize_config_at(path: &Path) -> Result<ConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG_TEMPLATE.as_bytes())?;
            Ok(ConfigInitResult::Created(path.to_path_buf()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(ConfigInitResult::AlreadyExists(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Initialize the per-user config file, resolving the default path first.
pub fn initialize_default_config() -> Result<ConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve the per-user config directory".to_string())
    })?;
    initialize_config_at(&path)
}
