//! CLI entry point for applink.

mod cli;

use applink::config::{
    initialize_config_at, initialize_default_config, load_config, BridgeConfig, ConfigInitResult,
};
use applink::deeplink;
use applink::detect::Platform;
use applink::engine::Bridge;
use applink::navigator::{DryRunNavigator, Navigator, SystemNavigator};
use applink::params::ParamMap;
use applink::reporter::TerminalReporter;
use applink::runtime::run_bridge;
use clap::Parser;
use std::path::Path;

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let mut config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };
    if args.debug {
        config.debug = true;
    }
    let color = !args.no_color;

    match args.command {
        cli::Command::Run {
            page_url,
            user_agent,
            dry_run,
            once,
        } => {
            let params = page_url.as_deref().map(params_from_input).unwrap_or_default();
            let user_agent = user_agent.unwrap_or_default();
            let navigator: Box<dyn Navigator> = if dry_run {
                Box::new(DryRunNavigator::new())
            } else {
                Box::new(SystemNavigator::new())
            };
            let reporter = TerminalReporter::new(color, config.debug);
            let bridge = Bridge::new(config, params, user_agent, navigator, Box::new(reporter));
            let input = tokio::io::BufReader::new(tokio::io::stdin());
            if let Err(e) = run_bridge(bridge, !once, input).await {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
        cli::Command::Compose {
            page_url,
            intent,
            json,
        } => {
            let params = params_from_input(&page_url);
            print_composed(&config, &params, intent, json);
        }
        cli::Command::Detect { user_agent, json } => {
            let platform = Platform::from_user_agent(&user_agent);
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "platform": platform.to_string(),
                        "supports_launch": platform.supports_launch(),
                    })
                );
            } else {
                println!("{platform}");
            }
        }
        cli::Command::Init { path } => {
            let result = match path {
                Some(path) => initialize_config_at(Path::new(&path)),
                None => initialize_default_config(),
            };
            match result {
                Ok(ConfigInitResult::Created(path)) => {
                    println!("wrote {}", path.display());
                }
                Ok(ConfigInitResult::AlreadyExists(path)) => {
                    println!("{} already exists, left unchanged", path.display());
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Accept either a full page URL or a bare query string.
fn params_from_input(input: &str) -> ParamMap {
    if input.contains("://") {
        ParamMap::from_page_url(input)
    } else {
        ParamMap::from_query(input)
    }
}

fn print_composed(config: &BridgeConfig, params: &ParamMap, intent: bool, json: bool) {
    let deep_link = deeplink::compose(&config.scheme, params);
    let intent_link = if intent {
        match deeplink::intent_uri(&deep_link, &config.package) {
            Some(link) => Some(link),
            None => {
                eprintln!("error: deep link has no scheme:// prefix, cannot build intent URI");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if json {
        println!(
            "{}",
            serde_json::json!({
                "deep_link": deep_link,
                "intent_uri": intent_link,
            })
        );
        return;
    }
    println!("{deep_link}");
    if let Some(link) = intent_link {
        println!("{link}");
    }
}
