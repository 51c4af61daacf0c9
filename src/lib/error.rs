use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrecisionError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unsupported confidence level: {0} (expected 0.95 or 0.80)")]
    UnsupportedConfidenceLevel(f64),
}

pub type Result<T> = std::result::Result<T, PrecisionError>;

/// Check the preconditions shared by every estimator: a sample size of at
/// least two and a rate given as a percentage.
pub fn check_sample(n: u32, rate: f64) -> Result<()> {
    if n < 2 {
        return Err(PrecisionError::InvalidParameter(format!(
            "sample size must be at least 2, got {}",
            n
        )));
    }
    if !(0.0..=100.0).contains(&rate) {
        return Err(PrecisionError::InvalidParameter(format!(
            "rate must be within [0, 100], got {}",
            rate
        )));
    }
    Ok(())
}
