use anyhow::{bail, Result};
use itertools::Itertools;
use log::{debug, warn};

/// Grid returned whenever the requested range cannot be generated.
pub const FALLBACK_GRID: [u32; 5] = [2, 4, 8, 16, 32];
/// Smallest sample size the Beta-Binomial estimators accept.
pub const MIN_SAMPLE_SIZE: u32 = 2;

const LOG_GROWTH: f64 = 1.5;
const LINEAR_POINTS: u32 = 20;
const MAX_LOG_STEPS: usize = 256;

/// Sample sizes spanning `[min_size, max_size]` for a precision-vs-size curve.
///
/// The range is normalised so that the start is at least 2 and the end is not
/// below the start. In log mode sizes grow by a factor 1.5 and the grid ends
/// exactly at the normalised maximum; in linear mode at most 20 evenly spaced
/// sizes are produced. Never fails: on any fault [`FALLBACK_GRID`] is returned.
pub fn generate_sample_sizes(min_size: f64, max_size: f64, use_log_scale: bool) -> Vec<u32> {
    match try_generate(min_size, max_size, use_log_scale) {
        Ok(sizes) => sizes,
        Err(e) => {
            warn!("Error generating sample sizes: {}", e);
            FALLBACK_GRID.to_vec()
        }
    }
}

fn try_generate(min_size: f64, max_size: f64, use_log_scale: bool) -> Result<Vec<u32>> {
    let (valid_min, valid_max) = normalise_range(min_size, max_size)?;
    debug!(
        "Generating {} grid over [{}, {}]",
        if use_log_scale { "log" } else { "linear" },
        valid_min,
        valid_max
    );
    let sizes = if use_log_scale {
        log_grid(valid_min, valid_max)?
    } else {
        linear_grid(valid_min, valid_max)
    };
    Ok(sizes.into_iter().dedup().collect())
}

fn normalise_range(min_size: f64, max_size: f64) -> Result<(u32, u32)> {
    if !min_size.is_finite() || !max_size.is_finite() {
        bail!("Non-finite size range: [{}, {}]", min_size, max_size);
    }
    let valid_min = min_size.round().max(MIN_SAMPLE_SIZE as f64);
    let valid_max = max_size.round().max(valid_min);
    if valid_max > u32::MAX as f64 {
        bail!("Sample size {} exceeds the supported maximum", valid_max);
    }
    Ok((valid_min as u32, valid_max as u32))
}

fn log_grid(valid_min: u32, valid_max: u32) -> Result<Vec<u32>> {
    let max = valid_max as f64;
    let mut sizes = Vec::new();
    let mut size = valid_min as f64;
    loop {
        if sizes.len() >= MAX_LOG_STEPS {
            bail!("Log grid did not reach {} within {} steps", valid_max, MAX_LOG_STEPS);
        }
        sizes.push(size.round() as u32);
        size = (size * LOG_GROWTH).min(max);
        if sizes.last() == Some(&valid_max) {
            break;
        }
    }
    if sizes.last() != Some(&valid_max) {
        sizes.push(valid_max);
    }
    Ok(sizes)
}

fn linear_grid(valid_min: u32, valid_max: u32) -> Vec<u32> {
    let step = ((valid_max - valid_min) / (LINEAR_POINTS - 1)).max(1);
    (0..LINEAR_POINTS)
        .map(|i| valid_min.saturating_add(i.saturating_mul(step)).min(valid_max))
        .collect()
}
