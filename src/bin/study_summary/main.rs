use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use rustyprecision_utils::config::{ConfigOverrides, MeasurementType, StudyConfig};
use rustyprecision_utils::report::StudySummary;
use std::path::Path;

mod cli;

fn main() {
    let args = cli::Cli::parse();
    // Set up logging level
    match args.verbosity {
        cli::LogLevel::Silent => {
            env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();
        }
        cli::LogLevel::Normal => {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        }
        cli::LogLevel::Verbose => {
            env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();
        }
    }

    study_summary(&args).unwrap_or_else(|e| {
        eprintln!("Error updating summary: {:#}", e);
        std::process::exit(1);
    });
}

fn study_summary(args: &cli::Cli) -> Result<()> {
    let config = build_config(args)?;
    debug!("Using configuration: {:?}", config);
    let summary = StudySummary::compute(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

fn build_config(args: &cli::Cli) -> Result<StudyConfig> {
    let config = match &args.config {
        Some(path) => StudyConfig::from_json_file(Path::new(path))?,
        None => StudyConfig::default(),
    };
    let overrides = ConfigOverrides {
        expected_rate: args.expected_rate,
        summary_size: args.sample_size.clone(),
        paired: args.design.map(|design| design == cli::DesignArg::Within),
        rho: args.rho,
        measurement_type: args.measurement.map(|measurement| match measurement {
            cli::MeasurementArg::SuccessRate => MeasurementType::SuccessRate,
            cli::MeasurementArg::CompletionRate => MeasurementType::CompletionRate,
            cli::MeasurementArg::Custom => MeasurementType::Custom,
        }),
        custom_measurement: args.custom_measurement.clone(),
        ..Default::default()
    };
    Ok(config.with_overrides(&overrides).sanitised())
}
