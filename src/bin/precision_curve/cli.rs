// src/bin/precision_curve/cli.rs
use clap::{Parser, ValueEnum};

/// Tabulate the margin of error of a binary measurement over a range of sample sizes.
#[derive(Parser, Debug)]
#[command(name = "precision_curve", version, about = "Margin of error by sample size")]
pub struct Cli {
    #[arg(
        long,
        short,
        value_name = "CONFIG",
        help = "JSON file with a study configuration; flags override its values"
    )]
    pub config: Option<String>,

    #[arg(long, value_name = "RATE", help = "Expected rate in percent [default: 50]")]
    pub expected_rate: Option<f64>,

    #[arg(long, value_name = "N", help = "Smallest sample size [default: 16]")]
    pub min_size: Option<f64>,

    #[arg(long, value_name = "N", help = "Largest sample size [default: 528]")]
    pub max_size: Option<f64>,

    #[arg(value_enum, long, value_name = "SCALE", help = "Spacing of sample sizes [default: log]")]
    pub scale: Option<ScaleArg>,

    #[arg(
        value_enum,
        long,
        default_value = "normal",
        value_name = "METHOD",
        help = "Interval method"
    )]
    pub method: MethodArg,

    #[arg(
        long,
        short,
        value_name = "OUT",
        help = "Output TSV file path, stdout if omitted"
    )]
    pub out: Option<String>,

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
pub enum ScaleArg {
    Log,
    Linear,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum MethodArg {
    Normal,
    Exact,
}

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Normal,
    Silent,
}
