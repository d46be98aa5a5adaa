//! Embeds git/build metadata for the `--version` surface.
//!
//! Kept dependency-free on purpose; when git or a usable clock is missing we
//! emit stable "unknown" markers instead of failing the build.

use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=APPLINK_BUILD_GIT_HASH");

    let git_hash = std::env::var("APPLINK_BUILD_GIT_HASH")
        .ok()
        .filter(|hash| !hash.trim().is_empty())
        .unwrap_or_else(git_short_hash);
    println!("cargo:rustc-env=APPLINK_BUILD_GIT_HASH={git_hash}");
    println!("cargo:rustc-env=APPLINK_BUILD_EPOCH={}", build_epoch_secs());
}

fn git_short_hash() -> String {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if text.is_empty() {
                "unknown".to_string()
            } else {
                text
            }
        }
        _ => "unknown".to_string(),
    }
}

fn build_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|delta| delta.as_secs())
        .unwrap_or(0)
}
