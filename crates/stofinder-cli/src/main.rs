use std::process::ExitCode;

use clap::{Parser, Subcommand};
use stofinder_core::{messages, Coordinate, LocationQuery};
use stofinder_maps::LocationPipeline;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "stofinder")]
#[command(about = "Find truck repair shops near a location")]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the greeting shown to new users
    Start,
    /// Print the usage help
    Help,
    /// Search around a shared geolocation
    Near {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Search around a typed address, e.g. "Україна, Рівне, 33000"
    Address {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Search from free text: a "lat, lon" pair or an address
    Ask {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Print the resolved origin and raw search result as JSON
    Shops {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let query = match cli.command {
        None | Some(Commands::Start) => {
            println!("{}", messages::WELCOME);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Help) => {
            println!("{}", messages::HELP);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Near { lat, lon }) => LocationQuery::Coordinate(Coordinate::new(lat, lon)?),
        Some(Commands::Address { text }) => LocationQuery::address(&text.join(" "))?,
        Some(Commands::Ask { text }) => LocationQuery::parse(&text.join(" "))?,
        Some(Commands::Shops { text }) => {
            let pipeline = build_pipeline()?;
            let query = LocationQuery::parse(&text.join(" "))?;
            return match pipeline.search(query).await {
                Ok((origin, result)) => {
                    let report = serde_json::json!({ "origin": origin, "result": result });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(not_found) => Ok(report_not_found(&not_found)),
            };
        }
    };

    let pipeline = build_pipeline()?;
    match pipeline.run(query).await {
        Ok(message) => {
            println!("{message}");
            Ok(ExitCode::SUCCESS)
        }
        Err(not_found) => Ok(report_not_found(&not_found)),
    }
}

fn build_pipeline() -> anyhow::Result<LocationPipeline> {
    let config = stofinder_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    Ok(LocationPipeline::new(&config.maps)?)
}

fn report_not_found(not_found: &stofinder_maps::AddressNotFound) -> ExitCode {
    tracing::info!(address = %not_found.address, "address not found");
    println!("{}", messages::ADDRESS_NOT_FOUND);
    ExitCode::from(2)
}

#[cfg(test)]
mod tests;
