// src/bin/study_summary/cli.rs
use clap::{Parser, ValueEnum};

/// Summarise the precision and detectable differences of a planned study.
#[derive(Parser, Debug)]
#[command(name = "study_summary", version, about = "Precision summary for a planned study")]
pub struct Cli {
    #[arg(
        long,
        short,
        value_name = "CONFIG",
        help = "JSON file with a study configuration; flags override its values"
    )]
    pub config: Option<String>,

    #[arg(
        long,
        short = 'n',
        value_name = "N",
        help = "Participants per condition, between 2 and 10000 [default: 16]"
    )]
    pub sample_size: Option<String>,

    #[arg(long, value_name = "RATE", help = "Expected rate in percent [default: 50]")]
    pub expected_rate: Option<f64>,

    #[arg(value_enum, long, value_name = "DESIGN", help = "Study design [default: between]")]
    pub design: Option<DesignArg>,

    #[arg(long, value_name = "RHO", help = "Within-subject correlation for within designs")]
    pub rho: Option<f64>,

    #[arg(value_enum, long, value_name = "MEASUREMENT", help = "What is being measured")]
    pub measurement: Option<MeasurementArg>,

    #[arg(long, value_name = "LABEL", help = "Label used with --measurement custom")]
    pub custom_measurement: Option<String>,

    #[arg(long, help = "Print the summary as JSON")]
    pub json: bool,

    #[arg(
        value_enum,
        long,
        default_value = "normal",
        value_name = "VERBOSITY",
        help = "Verbosity level"
    )]
    pub verbosity: LogLevel,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum DesignArg {
    Between,
    Within,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementArg {
    SuccessRate,
    CompletionRate,
    Custom,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Normal,
    Silent,
}
