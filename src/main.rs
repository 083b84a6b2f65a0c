use std::io::{self, Read, Write};

use roommate_matcher::config::{LoggingSettings, Settings};
use roommate_matcher::models::{ErrorResponse, FindMatchesRequest};
use roommate_matcher::{rank_request, AppError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // stdout carries the JSON response
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

/// Read the request from the path given as first argument, or stdin
fn read_request() -> Result<FindMatchesRequest, AppError> {
    let raw = match std::env::args().nth(1) {
        Some(path) => {
            info!("Reading match request from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading match request from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let request = read_request()?;
    info!(
        seeker = %request.seeker.user_id,
        candidates = request.candidates.len(),
        "Ranking candidates"
    );

    let response = rank_request(&settings.matching, request)?;
    info!(
        returned = response.matches.len(),
        total_results = response.total_results,
        "Ranking complete"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &response)?;
    writeln!(out)?;
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_tracing(&logging);

    let result = settings
        .map_err(AppError::from)
        .and_then(|settings| run(&settings));

    if let Err(e) = result {
        error!("Failed to rank matches: {}", e);
        let body = ErrorResponse {
            error: e.kind().to_string(),
            message: e.to_string(),
        };
        if let Ok(json) = serde_json::to_string(&body) {
            println!("{}", json);
        }
        std::process::exit(1);
    }
}
