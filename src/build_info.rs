//! Compile-time build metadata for the CLI version surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("APPLINK_BUILD_GIT_HASH");

/// Unix epoch seconds at compile time.
pub const BUILD_EPOCH: &str = env!("APPLINK_BUILD_EPOCH");

/// Render the version block used by `applink --version`.
pub fn cli_version_text() -> String {
    format!("applink {VERSION}\ncommit: {GIT_COMMIT}\nbuild-epoch: {BUILD_EPOCH}")
}
