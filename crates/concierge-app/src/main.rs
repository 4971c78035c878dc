mod app_state;
mod cli;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use concierge_chat::{HttpConfig, HttpTransport};
use concierge_common::{ConciergeError, ConfigError};
use concierge_config::ConciergeConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app_state::{ConciergeApp, LineOutcome};

/// Load config from the override path or the platform default, then apply
/// the endpoint override and re-validate.
fn load_config(args: &cli::Args) -> Result<ConciergeConfig, ConfigError> {
    let path = args.config.as_ref().map(PathBuf::from);
    let mut config = concierge_config::load_config(path.as_deref())?;

    if let Some(ref url) = args.endpoint {
        config.endpoint.url = url.clone();
        concierge_config::validation::validate(&config)?;
    }
    Ok(config)
}

fn build_transport(config: &ConciergeConfig) -> Result<HttpTransport, ConciergeError> {
    let http = HttpConfig::new(config.endpoint.url.clone())
        .with_timeout(Duration::from_secs(config.endpoint.timeout_secs.into()))
        .with_connect_timeout(Duration::from_secs(
            config.endpoint.connect_timeout_secs.into(),
        ));
    HttpTransport::new(http).map_err(|e| ConciergeError::Exchange(e.to_string()))
}

async fn run(config: ConciergeConfig) -> Result<(), ConciergeError> {
    let transport = build_transport(&config)?;
    tracing::info!(endpoint = %transport.url(), "Chat endpoint configured");

    let mut app = ConciergeApp::new(&config, Arc::new(transport));
    tracing::debug!(session = %app.session().id(), "Session started");

    for line in app.drain_output() {
        println!("{line}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match app.handle_line(&line).await {
            LineOutcome::Continue(output) => {
                for line in output {
                    println!("{line}");
                }
            }
            LineOutcome::Quit => break,
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    let directive = args
        .log_level
        .clone()
        .or_else(|| std::env::var("RUST_LOG").ok());
    let log_handle = logging::init(directive);

    tracing::info!("Concierge v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Config load failed: {e}");
            eprintln!("concierge: {e}");
            return ExitCode::FAILURE;
        }
    };
    log_handle.apply_config_level(config.logging.level);

    match run(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Fatal: {e}");
            eprintln!("concierge: {e}");
            ExitCode::FAILURE
        }
    }
}
