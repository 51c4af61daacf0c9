use crate::error::{PrecisionError, Result};
use statrs::distribution::{Beta, ContinuousCDF};

/// A Beta-Binomial model with a conjugate Beta prior on the success probability.
#[derive(Clone, Debug, PartialEq)]
pub struct BetaBinomialModel {
    pub alpha: f64,
    pub beta: f64,
}

impl BetaBinomialModel {
    /// Create a new model with the uniform prior alpha=1.0, beta=1.0
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
        }
    }

    pub fn new_with_params(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Posterior after observing `n` trials at `rate` percent, starting from
    /// the uniform prior. Successes may be fractional.
    pub fn from_rate(n: u32, rate: f64) -> Self {
        let pct = rate / 100.0;
        let n = n as f64;
        let mut model = Self::new();
        model.update(n * pct, n * (1.0 - pct));
        model
    }

    /// Update parameters with `successes` and `failures` pseudo-counts
    pub fn update(&mut self, successes: f64, failures: f64) {
        self.alpha += successes;
        self.beta += failures;
    }

    /// Compute mean of posterior
    pub fn mean(&self) -> f64 {
        self.alpha / (self.alpha + self.beta)
    }

    pub fn variance(&self) -> f64 {
        let numerator = self.alpha * self.beta;
        let denominator = (self.alpha + self.beta).powf(2.0) * (self.alpha + self.beta + 1.0);
        numerator / denominator
    }

    /// Compute standard deviation of posterior
    pub fn standard_deviation(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Posterior quantile, used by the exact interval method.
    pub fn quantile(&self, p: f64) -> Result<f64> {
        let dist = Beta::new(self.alpha, self.beta).map_err(|e| {
            PrecisionError::InvalidParameter(format!(
                "Beta(α = {}, β = {}) is not a valid distribution: {}",
                self.alpha, self.beta, e
            ))
        })?;
        Ok(dist.inverse_cdf(p))
    }
}

impl Default for BetaBinomialModel {
    fn default() -> Self {
        Self::new()
    }
}
