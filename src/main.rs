use clap::Parser;
use msds_scout::{Identifier, Scout, ScoutConfig};
use std::process::ExitCode;

mod args;
use args::{Args, apply_overrides};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration, then apply command-line overrides
    let config = match &args.config {
        Some(path) => match ScoutConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => ScoutConfig::default(),
    };
    let config = apply_overrides(config, &args);

    // Classify the identifier; blank input is the one caller-visible error
    let identifier = match Identifier::parse(&args.identifier) {
        Ok(identifier) => identifier,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Scouting safety data sheets for: {}", identifier.value());

    let scout = match Scout::new(config) {
        Ok(scout) => scout,
        Err(e) => {
            eprintln!("Failed to initialize: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    let report = scout.run(&identifier).await;

    // The report doubles as the program's output
    match serde_json::to_string_pretty(report.entries()) {
        Ok(json) => println!("{}", json),
        Err(e) => ::log::error!("Failed to render report: {}", e),
    }

    ::log::info!(
        "Scouting complete - {} documents reported in {:.2} seconds",
        report.len(),
        start_time.elapsed().as_secs_f64()
    );

    ExitCode::SUCCESS
}
