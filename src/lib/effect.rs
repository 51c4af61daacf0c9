use crate::confidence::ConfidenceLevel;
use crate::design::{DesignType, DEFAULT_RHO};
use crate::error::{check_sample, Result};
use crate::interval::Z_TWO_SIDED_95;
use crate::model::BetaBinomialModel;
use log::debug;

/// Standard deviation of the difference between two arms at `baseline_rate`.
fn pooled_standard_deviation(n: u32, baseline_rate: f64, design: &DesignType) -> Result<f64> {
    let variance = BetaBinomialModel::from_rate(n, baseline_rate).variance();
    Ok(design.pooled_variance(variance)?.sqrt())
}

/// Smallest difference (in percentage points) between two conditions that a
/// two-sided comparison at 95% confidence could detect with `n` observations
/// per condition.
pub fn minimum_detectable_difference(
    n: u32,
    baseline_rate: f64,
    design: DesignType,
) -> Result<f64> {
    check_sample(n, baseline_rate)?;
    let pooled_sd = pooled_standard_deviation(n, baseline_rate, &design)?;
    let difference = Z_TWO_SIDED_95 * pooled_sd * 100.0;
    debug!(
        "Detectable difference for n = {}, p = {}, {}: {:.3}",
        n, baseline_rate, design, difference
    );
    Ok(difference)
}

/// One-sided counterpart of [`minimum_detectable_difference`].
///
/// `confidence_level` must be 0.95 or 0.80. Paired designs always assume a
/// within-subject correlation of 0.5 here, whatever `design` carries.
pub fn minimum_directional_difference(
    n: u32,
    baseline_rate: f64,
    confidence_level: f64,
    design: DesignType,
) -> Result<f64> {
    check_sample(n, baseline_rate)?;
    let level = ConfidenceLevel::try_from(confidence_level)?;
    let design = match design {
        DesignType::Independent => DesignType::Independent,
        DesignType::Paired { .. } => DesignType::Paired { rho: DEFAULT_RHO },
    };
    let pooled_sd = pooled_standard_deviation(n, baseline_rate, &design)?;
    let difference = level.z_critical() * pooled_sd * 100.0;
    debug!(
        "Directional difference at {} for n = {}, p = {}, {}: {:.3}",
        level, n, baseline_rate, design, difference
    );
    Ok(difference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrecisionError;

    #[test]
    fn test_detectable_difference_values() {
        let independent = minimum_detectable_difference(100, 50.0, DesignType::Independent).unwrap();
        assert!((independent - 13.655967080115705).abs() < 1e-9);
        let paired = minimum_detectable_difference(100, 50.0, DesignType::paired()).unwrap();
        assert!((paired - 9.65622692601007).abs() < 1e-9);
    }

    #[test]
    fn test_directional_difference_values() {
        let d95 = minimum_directional_difference(100, 50.0, 0.95, DesignType::Independent).unwrap();
        assert!((d95 - 11.46125808509711).abs() < 1e-9);
        let d80 = minimum_directional_difference(100, 50.0, 0.80, DesignType::paired()).unwrap();
        assert!((d80 - 4.138382968290031).abs() < 1e-9);
    }

    #[test]
    fn test_paired_smaller_than_independent() {
        for n in vec![2, 16, 100, 1000] {
            for p in vec![0.0, 10.0, 50.0, 90.0, 100.0] {
                let independent = minimum_detectable_difference(n, p, DesignType::Independent).unwrap();
                for rho in vec![0.1, 0.5, 0.9] {
                    let paired = minimum_detectable_difference(n, p, DesignType::Paired { rho }).unwrap();
                    assert!(paired < independent);
                }
            }
        }
    }

    #[test]
    fn test_directional_smaller_than_two_sided() {
        for design in vec![DesignType::Independent, DesignType::paired()] {
            for n in vec![2, 16, 528] {
                for p in vec![0.0, 25.0, 50.0, 100.0] {
                    let two_sided = minimum_detectable_difference(n, p, design).unwrap();
                    let directional = minimum_directional_difference(n, p, 0.95, design).unwrap();
                    assert!(directional < two_sided);
                    let directional_80 = minimum_directional_difference(n, p, 0.80, design).unwrap();
                    assert!(directional_80 < directional);
                }
            }
        }
    }

    #[test]
    fn test_directional_ignores_custom_rho() {
        let custom = minimum_directional_difference(50, 30.0, 0.95, DesignType::Paired { rho: 0.9 }).unwrap();
        let default = minimum_directional_difference(50, 30.0, 0.95, DesignType::paired()).unwrap();
        assert_eq!(custom, default);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            minimum_detectable_difference(1, 50.0, DesignType::Independent),
            Err(PrecisionError::InvalidParameter(_))
        ));
        assert!(matches!(
            minimum_detectable_difference(10, 150.0, DesignType::paired()),
            Err(PrecisionError::InvalidParameter(_))
        ));
        assert!(matches!(
            minimum_detectable_difference(10, 50.0, DesignType::Paired { rho: 2.0 }),
            Err(PrecisionError::InvalidParameter(_))
        ));
        assert!(matches!(
            minimum_directional_difference(1, 50.0, 0.95, DesignType::Independent),
            Err(PrecisionError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_unsupported_confidence_level() {
        assert_eq!(
            minimum_directional_difference(10, 50.0, 0.90, DesignType::Independent),
            Err(PrecisionError::UnsupportedConfidenceLevel(0.90))
        );
    }
}
