use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use rustyprecision_utils::config::{ConfigOverrides, Scale, StudyConfig};
use rustyprecision_utils::interval::IntervalMethod;
use rustyprecision_utils::report;
use std::fs::File;
use std::path::Path;

mod cli;

fn main() -> Result<()> {
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

    let config = build_config(&args)?;
    debug!("Using configuration: {:?}", config);
    let method = match args.method {
        cli::MethodArg::Normal => IntervalMethod::NormalApproximation,
        cli::MethodArg::Exact => IntervalMethod::ExactBeta,
    };

    info!(
        "Computing precision curve over [{}, {}] at {}%",
        config.min_size, config.max_size, config.expected_rate
    );
    let points = report::precision_curve(&config, method)?;

    match &args.out {
        Some(out) => {
            let out_path = Path::new(out);
            if out_path.exists() {
                bail!("Output file already exists: {}", out_path.display());
            }
            let file = File::create(out_path)
                .with_context(|| format!("Could not create output file: {}", out_path.display()))?;
            report::write_curve_tsv(&points, file)?;
            info!("Wrote {} sample sizes to {}", points.len(), out_path.display());
        }
        None => report::write_curve_tsv(&points, std::io::stdout().lock())?,
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
        min_size: args.min_size,
        max_size: args.max_size,
        scale: args.scale.map(|scale| match scale {
            cli::ScaleArg::Log => Scale::Log,
            cli::ScaleArg::Linear => Scale::Linear,
        }),
        ..Default::default()
    };
    Ok(config.with_overrides(&overrides).sanitised())
}
