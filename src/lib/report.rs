use crate::config::StudyConfig;
use crate::confidence::ConfidenceLevel;
use crate::design::DesignType;
use crate::effect::{minimum_detectable_difference, minimum_directional_difference};
use crate::grid::generate_sample_sizes;
use crate::interval::{credible_interval_with, IntervalMethod};
use anyhow::{Context, Result};
use csv::WriterBuilder;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use strum::IntoEnumIterator;

/// One point of the precision-vs-size curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub sample_size: u32,
    pub lower: f64,
    pub upper: f64,
    pub half_width: f64,
}

/// Credible interval at every size of the grid spanned by the configured range.
pub fn precision_curve(config: &StudyConfig, method: IntervalMethod) -> Result<Vec<CurvePoint>> {
    let sizes = generate_sample_sizes(config.min_size, config.max_size, config.scale.is_log());
    debug!("Computing precision at {} sample sizes", sizes.len());
    sizes
        .into_iter()
        .map(|n| -> Result<CurvePoint> {
            let ci = credible_interval_with(n, config.expected_rate, method)
                .with_context(|| format!("Error computing interval for n = {}", n))?;
            Ok(CurvePoint {
                sample_size: n,
                lower: ci.lower,
                upper: ci.upper,
                half_width: ci.half_width,
            })
        })
        .collect()
}

/// Write the curve as a tab separated table with a header row.
pub fn write_curve_tsv<W: Write>(points: &[CurvePoint], writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_writer(writer);
    for point in points {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionalDifference {
    pub confidence: ConfidenceLevel,
    pub difference: f64,
}

/// Headline numbers for a study of `sample_size` observations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySummary {
    pub measurement: String,
    pub expected_rate: f64,
    pub sample_size: u32,
    pub design: DesignType,
    pub margin_of_error: f64,
    pub comparison_size: String,
    pub significant_difference: f64,
    pub directional_differences: Vec<DirectionalDifference>,
}

impl StudySummary {
    pub fn compute(config: &StudyConfig) -> Result<Self> {
        let n = config.summary_size;
        let rate = config.expected_rate;
        info!("Summarising a study of {} at {}% {}", n, rate, config.measurement_label());

        let ci = credible_interval_with(n, rate, IntervalMethod::NormalApproximation)
            .context("Error computing margin of error")?;
        let significant_difference = minimum_detectable_difference(n, rate, config.design)
            .context("Error computing detectable difference")?;
        let directional_differences = ConfidenceLevel::iter()
            .map(|level| -> Result<DirectionalDifference> {
                let difference =
                    minimum_directional_difference(n, rate, level.as_fraction(), config.design)
                        .with_context(|| format!("Error computing directional difference at {}", level))?;
                Ok(DirectionalDifference {
                    confidence: level,
                    difference,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            measurement: config.measurement_label().to_string(),
            expected_rate: rate,
            sample_size: n,
            design: config.design,
            margin_of_error: ci.half_width,
            comparison_size: config.design.comparison_size(n),
            significant_difference,
            directional_differences,
        })
    }
}

impl fmt::Display for StudySummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "With {} participants and an expected {} of {}%, the margin of error is ±{:.1}%.",
            self.sample_size, self.measurement, self.expected_rate, self.margin_of_error
        )?;
        let participants = if self.design.is_paired() {
            format!("{} participants", self.comparison_size)
        } else {
            self.comparison_size.clone()
        };
        writeln!(
            f,
            "Comparing two conditions ({}) with {}:",
            self.design, participants
        )?;
        writeln!(
            f,
            "  difference detectable in either direction: {:.1} percentage points",
            self.significant_difference
        )?;
        for directional in &self.directional_differences {
            writeln!(
                f,
                "  directional difference at {} confidence: {:.1} percentage points",
                directional.confidence, directional.difference
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigOverrides, Scale};
    use std::io::{Read, Seek, SeekFrom};
    use tempfile::NamedTempFile;

    #[test]
    fn test_precision_curve_default_config() {
        let config = StudyConfig::default();
        let points = precision_curve(&config, IntervalMethod::NormalApproximation).unwrap();
        assert_eq!(points.len(), 10);
        assert_eq!(points[0].sample_size, 16);
        assert_eq!(points.last().unwrap().sample_size, 528);
        assert!((points[0].half_width - 22.48274191931505).abs() < 1e-9);
        for pair in points.windows(2) {
            assert!(pair[1].half_width < pair[0].half_width);
        }
    }

    #[test]
    fn test_precision_curve_invalid_rate() {
        let config = StudyConfig {
            expected_rate: 120.0,
            ..Default::default()
        };
        assert!(precision_curve(&config, IntervalMethod::NormalApproximation).is_err());
    }

    #[test]
    fn test_precision_curve_rate_override_not_replaced() {
        let overrides = ConfigOverrides {
            expected_rate: Some(150.0),
            min_size: Some(10.0),
            max_size: Some(12.0),
            scale: Some(Scale::Linear),
            ..Default::default()
        };
        let config = StudyConfig::default().with_overrides(&overrides).sanitised();
        let err = precision_curve(&config, IntervalMethod::NormalApproximation).unwrap_err();
        let root = err.root_cause().to_string();
        assert!(root.contains("rate must be within [0, 100], got 150"), "{}", root);
    }

    #[test]
    fn test_write_curve_tsv() {
        let config = StudyConfig {
            min_size: 10.0,
            max_size: 12.0,
            scale: Scale::Linear,
            ..Default::default()
        };
        let points = precision_curve(&config, IntervalMethod::NormalApproximation).unwrap();
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write_curve_tsv(&points, file.reopen().unwrap()).unwrap();
        file.seek(SeekFrom::Start(0)).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "sample_size\tlower\tupper\thalf_width");
        assert!(lines[1].starts_with("10\t"));
        assert!(lines[3].starts_with("12\t"));
    }

    #[test]
    fn test_study_summary_independent() {
        let config = StudyConfig {
            summary_size: 100,
            ..Default::default()
        };
        let summary = StudySummary::compute(&config).unwrap();
        assert_eq!(summary.measurement, "success rate");
        assert_eq!(summary.comparison_size, "100 per condition (200 total)");
        assert!((summary.margin_of_error - 9.65622692601007).abs() < 1e-9);
        assert!((summary.significant_difference - 13.655967080115705).abs() < 1e-9);
        assert_eq!(summary.directional_differences.len(), 2);
        assert_eq!(summary.directional_differences[0].confidence, ConfidenceLevel::NinetyFive);
        assert!((summary.directional_differences[0].difference - 11.46125808509711).abs() < 1e-9);

        let text = summary.to_string();
        assert!(text.contains("±9.7%"));
        assert!(text.contains("13.7 percentage points"));
        assert!(text.contains("at 95% confidence: 11.5"));
        assert!(text.contains("(between-subjects) with 100 per condition (200 total):"));
    }

    #[test]
    fn test_study_summary_paired() {
        let config = StudyConfig {
            summary_size: 100,
            design: DesignType::paired(),
            ..Default::default()
        };
        let summary = StudySummary::compute(&config).unwrap();
        assert_eq!(summary.comparison_size, "100");
        assert!((summary.significant_difference - 9.65622692601007).abs() < 1e-9);
        assert!((summary.directional_differences[1].difference - 4.138382968290031).abs() < 1e-9);
        assert!(summary.to_string().contains("with 100 participants:"));
    }

    #[test]
    fn test_study_summary_json() {
        let summary = StudySummary::compute(&StudyConfig::default()).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["sample_size"], 16);
        assert_eq!(json["design"]["type"], "independent");
        assert_eq!(json["directional_differences"][1]["confidence"], "eighty");
    }

    #[test]
    fn test_study_summary_error() {
        let config = StudyConfig {
            summary_size: 1,
            ..Default::default()
        };
        assert!(StudySummary::compute(&config).is_err());
    }
}
