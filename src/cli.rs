//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};

/// Deep-link bridge for custom app schemes: compose launch URIs and drive
/// the timed launch sequence from the terminal.
#[derive(Debug, Parser)]
#[command(name = "applink", version, long_version = Box::leak(applink::build_info::cli_version_text().into_boxed_str()) as &'static str)]
pub struct Args {
    /// Path to config file (default: ./applink.toml or
    /// ~/.config/applink/applink.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Force diagnostic output on, regardless of the configured flag.
    #[arg(long = "debug")]
    pub debug: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the timed launch sequence against the host URI opener.
    Run {
        /// Bridge page URL whose query parameters ride along.
        #[arg(long = "url")]
        page_url: Option<String>,

        /// User-agent string to classify; unset classifies as Unknown.
        #[arg(long = "user-agent")]
        user_agent: Option<String>,

        /// Print navigations instead of performing them.
        #[arg(long = "dry-run")]
        dry_run: bool,

        /// Exit after the manual control reveals instead of reading retries
        /// from stdin.
        #[arg(long = "once")]
        once: bool,
    },

    /// Compose the deep link for a page URL or query string and print it.
    Compose {
        /// Page URL (or bare query string) carrying the parameters.
        page_url: String,

        /// Also print the Android intent:// form.
        #[arg(long = "intent")]
        intent: bool,

        /// Emit machine-readable JSON.
        #[arg(long = "json")]
        json: bool,
    },

    /// Classify a user-agent string.
    Detect {
        user_agent: String,

        /// Emit machine-readable JSON.
        #[arg(long = "json")]
        json: bool,
    },

    /// Write the default config template.
    Init {
        /// Target path (default: the per-user config file).
        #[arg(long = "path")]
        path: Option<String>,
    },
}
