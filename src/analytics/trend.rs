#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub index: usize,
    pub value: f64,
}

/// Least-squares line through the accepted points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regression {
    pub slope: f64,
    pub intercept: f64,
    /// Fitted value at the first accepted index
    pub start: TrendPoint,
    /// Fitted value at the last accepted index
    pub end: TrendPoint,
}

impl Regression {
    pub fn value_at(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }
}

/// Ordinary least squares over `(index, value)` pairs in index order.
///
/// Fewer than two points, or points that all share one index, give no line.
pub fn fit(points: &[(usize, f64)]) -> Option<Regression> {
    let (&(first, _), &(last, _)) = (points.first()?, points.last()?);
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = points.iter().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), &(x, y)| {
            let x = x as f64;
            (sx + x, sy + y, sxy + x * y, sxx + x * x)
        },
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    let at = |index: usize| TrendPoint {
        index,
        value: slope * index as f64 + intercept,
    };

    Some(Regression {
        slope,
        intercept,
        start: at(first),
        end: at(last),
    })
}
