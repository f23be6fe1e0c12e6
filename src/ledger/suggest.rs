//! Suggested reviewer completion: an ordinary least-squares line fit of
//! reviewer completion on employee completion over already-reviewed records.
//! Deterministic, refit on demand from the ledger; nothing is persisted.

/// Minimum number of reviewed records before a fit is attempted.
pub const MIN_FIT_POINTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Predicted reviewer completion, clamped to the valid percentage range.
    pub fn predict(&self, employee_completion: f64) -> f64 {
        (self.intercept + self.slope * employee_completion).clamp(0.0, 100.0)
    }
}

/// Fit over `(employee_completion, reviewer_completion)` pairs. Returns None
/// when there are too few points. A degenerate x column (all employee values
/// equal) falls back to the mean reviewer completion.
pub fn fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < MIN_FIT_POINTS {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut var_x = 0.0;
    let mut cov_xy = 0.0;
    for (x, y) in points {
        var_x += (x - mean_x) * (x - mean_x);
        cov_xy += (x - mean_x) * (y - mean_y);
    }

    if var_x == 0.0 {
        return Some(LinearFit {
            slope: 0.0,
            intercept: mean_y,
        });
    }

    let slope = cov_xy / var_x;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_few_points() {
        assert!(fit(&[]).is_none());
        assert!(fit(&[(40.0, 40.0), (60.0, 60.0)]).is_none());
    }

    #[test]
    fn test_identity_fit() {
        let f = fit(&[(40.0, 40.0), (60.0, 60.0), (80.0, 80.0)]).unwrap();
        assert!((f.slope - 1.0).abs() < 1e-9);
        assert!(f.intercept.abs() < 1e-9);
        assert!((f.predict(50.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_consistent_discount() {
        // Reviewer always shaves ten points off.
        let f = fit(&[(50.0, 40.0), (70.0, 60.0), (90.0, 80.0)]).unwrap();
        assert!((f.predict(60.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_x_uses_mean() {
        let f = fit(&[(50.0, 30.0), (50.0, 50.0), (50.0, 70.0)]).unwrap();
        assert_eq!(f.slope, 0.0);
        assert!((f.predict(10.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_is_clamped() {
        // Slope 1, intercept +20: extrapolating past 80 would exceed 100.
        let f = fit(&[(0.0, 20.0), (40.0, 60.0), (80.0, 100.0)]).unwrap();
        assert_eq!(f.predict(90.0), 100.0);
        // Slope 1, intercept -20: extrapolating below 20 would go negative.
        let g = fit(&[(20.0, 0.0), (60.0, 40.0), (100.0, 80.0)]).unwrap();
        assert_eq!(g.predict(0.0), 0.0);
    }
}
