use crate::error::{Error, Result};
use crate::util::{percentile, sorted};

/// Multiple of the IQR allowed beyond each quartile
pub const IQR_FENCE: f64 = 1.5;

/// Acceptance interval; values outside it are outliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl Bounds {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// IQR fences over `values`, with the lower fence clipped at `domain_floor`.
///
/// A single value collapses the interval onto that value.
pub fn bounds(values: &[f64], domain_floor: f64) -> Result<Bounds> {
    let sorted = sorted(values);
    let (Some(q1), Some(q3)) = (percentile(&sorted, 25.0), percentile(&sorted, 75.0)) else {
        return Err(Error::EmptySample);
    };

    let iqr = q3 - q1;
    Ok(Bounds {
        q1,
        q3,
        lower: domain_floor.max(q1 - IQR_FENCE * iqr),
        upper: q3 + IQR_FENCE * iqr,
    })
}
