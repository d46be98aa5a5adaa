//! applink — a deep-link bridge engine for custom app schemes.
//!
//! Models the hand-off page that sits between two apps: it reads the
//! incoming query parameters, classifies the visiting platform from its
//! user-agent string, composes a custom-scheme deep link (keeping the
//! attribution referrer first so tracking survives the hop), and drives a
//! layered launch sequence with a manual retry fallback. Timing, navigation,
//! and reporting all sit behind injectable seams so the whole flow is
//! deterministic under test.
//!
//! # Quick start
//!
//! ```no_run
//! use applink::config::load_config;
//! use applink::engine::Bridge;
//! use applink::navigator::SystemNavigator;
//! use applink::params::ParamMap;
//! use applink::reporter::TerminalReporter;
//! use applink::runtime::run_bridge;
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let params = ParamMap::from_page_url("https://bridge.example/land?airbridge_referrer=r");
//! let reporter = TerminalReporter::new(true, config.debug);
//! let bridge = Bridge::new(
//!     config,
//!     params,
//!     "Mozilla/5.0 (Linux; Android 14)".to_string(),
//!     Box::new(SystemNavigator::new()),
//!     Box::new(reporter),
//! );
//! let stdin = tokio::io::BufReader::new(tokio::io::stdin());
//! run_bridge(bridge, false, stdin).await.unwrap();
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod deeplink;
pub mod detect;
pub mod engine;
pub mod error;
pub mod navigator;
pub mod params;
pub mod reporter;
pub mod runtime;
#[cfg(test)]
pub mod testsupport;
