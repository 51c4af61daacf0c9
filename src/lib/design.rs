use crate::error::{PrecisionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Correlation assumed between the two measurements of a paired design.
pub const DEFAULT_RHO: f64 = 0.5;

/// How the two conditions being compared are sampled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DesignType {
    /// Between-subjects: each condition has its own sample of size n.
    #[default]
    Independent,
    /// Within-subjects: the same n subjects are measured under both conditions.
    Paired { rho: f64 },
}

impl DesignType {
    pub fn paired() -> Self {
        DesignType::Paired { rho: DEFAULT_RHO }
    }

    pub fn is_paired(&self) -> bool {
        matches!(self, DesignType::Paired { .. })
    }

    /// Variance of the difference between two arms that each have
    /// `single_arm_variance`.
    pub fn pooled_variance(&self, single_arm_variance: f64) -> Result<f64> {
        match *self {
            DesignType::Independent => Ok(2.0 * single_arm_variance),
            DesignType::Paired { rho } => {
                if !(0.0..=1.0).contains(&rho) {
                    return Err(PrecisionError::InvalidParameter(format!(
                        "correlation must be within [0, 1], got {}",
                        rho
                    )));
                }
                Ok(2.0 * single_arm_variance * (1.0 - rho))
            }
        }
    }

    /// Describe how many observations a comparison needs at `n` per condition.
    pub fn comparison_size(&self, n: u32) -> String {
        match self {
            DesignType::Independent => {
                format!("{} per condition ({} total)", n, n as u64 * 2)
            }
            DesignType::Paired { .. } => n.to_string(),
        }
    }
}

impl fmt::Display for DesignType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DesignType::Independent => write!(f, "between-subjects"),
            DesignType::Paired { rho } => write!(f, "within-subjects (ρ = {})", rho),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pooled_variance() {
        assert_eq!(DesignType::Independent.pooled_variance(0.01).unwrap(), 0.02);
        assert_eq!(DesignType::paired().pooled_variance(0.01).unwrap(), 0.01);
        assert_eq!(
            DesignType::Paired { rho: 0.0 }.pooled_variance(0.01).unwrap(),
            0.02
        );
        assert_eq!(
            DesignType::Paired { rho: 1.0 }.pooled_variance(0.01).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_pooled_variance_invalid_rho() {
        for rho in vec![-0.1, 1.5, f64::NAN] {
            assert!(DesignType::Paired { rho }.pooled_variance(0.01).is_err());
        }
    }

    #[test]
    fn test_default_is_independent() {
        assert_eq!(DesignType::default(), DesignType::Independent);
    }

    #[test]
    fn test_comparison_size() {
        assert_eq!(
            DesignType::Independent.comparison_size(16),
            "16 per condition (32 total)"
        );
        assert_eq!(DesignType::paired().comparison_size(16), "16");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&DesignType::paired()).unwrap();
        assert_eq!(json, r#"{"type":"paired","rho":0.5}"#);
        let parsed: DesignType = serde_json::from_str(r#"{"type":"independent"}"#).unwrap();
        assert_eq!(parsed, DesignType::Independent);
    }
}
