use crate::error::{check_sample, Result};
use crate::model::BetaBinomialModel;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-sided 95% critical value of the standard normal.
pub const Z_TWO_SIDED_95: f64 = 1.96;

/// A credible interval on the percentage scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibleInterval {
    pub lower: f64,
    pub upper: f64,
    pub half_width: f64,
}

impl CredibleInterval {
    /// Build from fractional bounds, clamping them to [0, 1].
    fn from_bounds(lower: f64, upper: f64) -> Self {
        let lower = lower.max(0.0) * 100.0;
        let upper = upper.min(1.0) * 100.0;
        Self {
            lower,
            upper,
            half_width: (upper - lower) / 2.0,
        }
    }
}

impl fmt::Display for CredibleInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{:.1}%, {:.1}%] (±{:.1}%)",
            self.lower, self.upper, self.half_width
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalMethod {
    /// Posterior mean ± 1.96 posterior standard deviations.
    #[default]
    NormalApproximation,
    /// 2.5% and 97.5% posterior quantiles.
    ExactBeta,
}

/// 95% credible interval for a rate of `p` percent observed over `n` trials.
///
/// Uses the normal approximation to the Beta(n·p + 1, n·(1 − p) + 1)
/// posterior. Bounds are clamped to [0, 100], so intervals at the extremes
/// are asymmetric.
pub fn credible_interval(n: u32, p: f64) -> Result<CredibleInterval> {
    credible_interval_with(n, p, IntervalMethod::NormalApproximation)
}

pub fn credible_interval_with(n: u32, p: f64, method: IntervalMethod) -> Result<CredibleInterval> {
    check_sample(n, p)?;
    let model = BetaBinomialModel::from_rate(n, p);
    let interval = match method {
        IntervalMethod::NormalApproximation => {
            let mean = model.mean();
            let margin = Z_TWO_SIDED_95 * model.standard_deviation();
            CredibleInterval::from_bounds(mean - margin, mean + margin)
        }
        IntervalMethod::ExactBeta => {
            CredibleInterval::from_bounds(model.quantile(0.025)?, model.quantile(0.975)?)
        }
    };
    debug!(
        "n = {}, p = {}: α = {:.3}, β = {:.3}, interval = {}",
        n, p, model.alpha, model.beta, interval
    );
    Ok(interval)
}
