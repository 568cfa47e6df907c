//! Hayat portal server

#![allow(missing_docs)]

use clap::Parser;
use hayat_portal::config::Config;
use hayat_portal::server::builder::run_with_config;
use hayat_portal::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portal", version, about = "Hayat community portal server")]
struct Cli {
    /// Configuration file; environment variables are used when it is missing
    #[arg(short, long, env = "PORTAL_CONFIG", default_value = "config/portal.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_with_config(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
