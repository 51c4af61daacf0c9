use crate::error::PrecisionError;
use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum_macros::EnumIter;

/// Confidence levels supported for directional (one-sided) thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    NinetyFive,
    Eighty,
}

impl ConfidenceLevel {
    /// One-sided critical value of the standard normal.
    pub fn z_critical(&self) -> f64 {
        match self {
            ConfidenceLevel::NinetyFive => 1.645,
            ConfidenceLevel::Eighty => 0.84,
        }
    }

    pub fn as_fraction(&self) -> f64 {
        match self {
            ConfidenceLevel::NinetyFive => 0.95,
            ConfidenceLevel::Eighty => 0.80,
        }
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = PrecisionError;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        const TOLERANCE: f64 = 1e-9;
        if (level - 0.95).abs() < TOLERANCE {
            Ok(ConfidenceLevel::NinetyFive)
        } else if (level - 0.80).abs() < TOLERANCE {
            Ok(ConfidenceLevel::Eighty)
        } else {
            Err(PrecisionError::UnsupportedConfidenceLevel(level))
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfidenceLevel::NinetyFive => write!(f, "95%"),
            ConfidenceLevel::Eighty => write!(f, "80%"),
        }
    }
}

impl FromStr for ConfidenceLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_end_matches('%') {
            "95" | "0.95" => Ok(ConfidenceLevel::NinetyFive),
            "80" | "0.80" | "0.8" => Ok(ConfidenceLevel::Eighty),
            _ => bail!("Invalid confidence level: {}", s),
        }
    }
}
