//! Progress trends over a history of results.
//!
//! Every sample is kept for display and tagged when it falls outside the IQR
//! fences; only the accepted ones feed the least-squares line. All functions
//! here are pure and hold no state between calls.

pub mod outliers;
pub mod trend;

pub use outliers::{bounds, Bounds};
pub use trend::{fit, Regression, TrendPoint};

use crate::error::Result;
use crate::time_series::SampleSeries;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub is_outlier: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendResult {
    pub points: Vec<ChartPoint>,
    /// None for an empty series
    pub bounds: Option<Bounds>,
    pub regression: Option<Regression>,
}

impl TrendResult {
    pub fn outlier_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_outlier).count()
    }
}

/// Flag outliers in `series` and fit a trend through the rest
pub fn analyze(series: &SampleSeries, domain_floor: f64) -> Result<TrendResult> {
    if series.is_empty() {
        return Ok(TrendResult {
            points: Vec::new(),
            bounds: None,
            regression: None,
        });
    }

    let bounds = bounds(&series.values(), domain_floor)?;
    debug!(
        q1 = bounds.q1,
        q3 = bounds.q3,
        lower = bounds.lower,
        upper = bounds.upper,
        "outlier bounds"
    );

    let points: Vec<ChartPoint> = series
        .samples()
        .iter()
        .map(|s| ChartPoint {
            label: s.label.clone(),
            value: s.value,
            is_outlier: bounds.is_outlier(s.value),
        })
        .collect();

    let accepted: Vec<(usize, f64)> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| !p.is_outlier)
        .map(|(i, p)| (i, p.value))
        .collect();

    let regression = fit(&accepted);
    debug!(
        samples = points.len(),
        accepted = accepted.len(),
        has_trend = regression.is_some(),
        "trend analysed"
    );

    Ok(TrendResult {
        points,
        bounds: Some(bounds),
        regression,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_series::Sample;

    fn series(values: &[f64]) -> SampleSeries {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(format!("day {i}"), *v))
            .collect()
    }

    #[test]
    fn test_spike_is_shown_but_not_fitted() {
        let result = analyze(&series(&[10.0, 12.0, 11.0, 13.0, 100.0]), 10.0).unwrap();

        assert_eq!(result.points.len(), 5);
        assert_eq!(result.outlier_count(), 1);
        assert!(result.points[4].is_outlier);
        assert_eq!(result.points[4].label, "day 4");

        let line = result.regression.unwrap();
        assert_eq!((line.start.index, line.end.index), (0, 3));
        assert!((line.slope - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_empty_series() {
        let result = analyze(&SampleSeries::new(), 10.0).unwrap();
        assert!(result.points.is_empty());
        assert!(result.bounds.is_none());
        assert!(result.regression.is_none());
    }

    #[test]
    fn test_single_sample_has_no_trend() {
        let result = analyze(&series(&[55.0]), 10.0).unwrap();
        assert_eq!(result.points.len(), 1);
        assert!(!result.points[0].is_outlier);
        assert!(result.regression.is_none());
    }

    #[test]
    fn test_floor_marks_slow_sessions() {
        // Fences are [8, 16]; the floor lifts the lower one to 10.
        let result = analyze(&series(&[8.0, 11.0, 12.0, 13.0, 14.0]), 10.0).unwrap();
        assert!(result.points[0].is_outlier);
        assert_eq!(result.regression.unwrap().start.index, 1);
    }
}
