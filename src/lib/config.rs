use crate::design::{DesignType, DEFAULT_RHO};
use crate::guard::{validate_number, validate_value};
use anyhow::{bail, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

pub const MAX_SUMMARY_SIZE: u32 = 10_000;
pub const DEFAULT_SUMMARY_SIZE: u32 = 16;
pub const DEFAULT_EXPECTED_RATE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementType {
    SuccessRate,
    CompletionRate,
    Custom,
}

impl MeasurementType {
    pub fn label(&self) -> &'static str {
        match self {
            MeasurementType::SuccessRate => "success rate",
            MeasurementType::CompletionRate => "completion rate",
            MeasurementType::Custom => "custom",
        }
    }
}

impl fmt::Display for MeasurementType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for MeasurementType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success rate" | "success_rate" => Ok(MeasurementType::SuccessRate),
            "completion rate" | "completion_rate" => Ok(MeasurementType::CompletionRate),
            "custom" => Ok(MeasurementType::Custom),
            _ => bail!("Invalid measurement type: {}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    Log,
    Linear,
}

impl Scale {
    pub fn is_log(&self) -> bool {
        matches!(self, Scale::Log)
    }
}

/// Everything a caller chooses when planning a study. Passed explicitly to
/// the report functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    pub measurement_type: MeasurementType,
    pub custom_measurement: String,
    pub expected_rate: f64,
    pub min_size: f64,
    pub max_size: f64,
    pub scale: Scale,
    pub summary_size: u32,
    pub design: DesignType,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            measurement_type: MeasurementType::SuccessRate,
            custom_measurement: String::new(),
            expected_rate: DEFAULT_EXPECTED_RATE,
            min_size: 16.0,
            max_size: 528.0,
            scale: Scale::Log,
            summary_size: DEFAULT_SUMMARY_SIZE,
            design: DesignType::Independent,
        }
    }
}

impl StudyConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file: {}", path.display()))?;
        let config: StudyConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Error parsing config file: {}", path.display()))?;
        Ok(config)
    }

    /// Label shown for the measurement; an empty custom label reads "measurement".
    pub fn measurement_label(&self) -> &str {
        match self.measurement_type {
            MeasurementType::Custom if self.custom_measurement.trim().is_empty() => "measurement",
            MeasurementType::Custom => self.custom_measurement.trim(),
            ref other => other.label(),
        }
    }

    /// Apply caller-supplied overrides on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(rate) = overrides.expected_rate {
            self.expected_rate = rate;
        }
        if let Some(min_size) = overrides.min_size {
            self.min_size = min_size;
        }
        if let Some(max_size) = overrides.max_size {
            self.max_size = max_size;
        }
        if let Some(scale) = overrides.scale {
            self.scale = scale;
        }
        if let Some(size) = &overrides.summary_size {
            self.summary_size = validate_number(
                size,
                2.0,
                MAX_SUMMARY_SIZE as f64,
                DEFAULT_SUMMARY_SIZE as f64,
            )
            .round() as u32;
        }
        let rho = overrides.rho.unwrap_or(match self.design {
            DesignType::Paired { rho } => rho,
            DesignType::Independent => DEFAULT_RHO,
        });
        match overrides.paired {
            Some(true) => self.design = DesignType::Paired { rho },
            Some(false) => self.design = DesignType::Independent,
            None => {
                if self.design.is_paired() {
                    self.design = DesignType::Paired { rho };
                }
            }
        }
        if let Some(measurement_type) = &overrides.measurement_type {
            self.measurement_type = measurement_type.clone();
        }
        if let Some(label) = &overrides.custom_measurement {
            self.custom_measurement = label.clone();
        }
        self
    }

    /// Replace an out-of-range summary size or correlation with its default
    /// and keep the size range ordered. The expected rate is left as given so
    /// that an invalid rate reaches the estimators.
    pub fn sanitised(mut self) -> Self {
        let summary_size = validate_value(
            self.summary_size as f64,
            2.0,
            MAX_SUMMARY_SIZE as f64,
            DEFAULT_SUMMARY_SIZE as f64,
        ) as u32;
        if summary_size != self.summary_size {
            warn!(
                "Summary size {} is outside [2, {}], using {}",
                self.summary_size, MAX_SUMMARY_SIZE, summary_size
            );
            self.summary_size = summary_size;
        }
        if self.max_size < self.min_size {
            warn!(
                "Maximum size {} is below minimum size {}, using {}",
                self.max_size, self.min_size, self.min_size
            );
            self.max_size = self.min_size;
        }
        if let DesignType::Paired { rho } = self.design {
            let valid_rho = validate_value(rho, 0.0, 1.0, DEFAULT_RHO);
            if valid_rho != rho {
                warn!("Correlation {} is outside [0, 1], using {}", rho, valid_rho);
            }
            self.design = DesignType::Paired { rho: valid_rho };
        }
        self
    }
}

/// Values given on the command line that take precedence over a config file.
/// The summary size is kept as text and validated like form input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub expected_rate: Option<f64>,
    pub min_size: Option<f64>,
    pub max_size: Option<f64>,
    pub scale: Option<Scale>,
    pub summary_size: Option<String>,
    pub paired: Option<bool>,
    pub rho: Option<f64>,
    pub measurement_type: Option<MeasurementType>,
    pub custom_measurement: Option<String>,
}
