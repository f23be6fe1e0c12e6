use crate::error::LedgerError;

/// Default point total per task when `init` is not given `--total`.
pub const DEFAULT_TASK_TOTAL: f64 = 5.0;

/// Out-of-range completion percentages are rejected, never clamped and
/// never stored.
pub fn validate_completion(pct: i64) -> Result<i64, LedgerError> {
    if (0..=100).contains(&pct) {
        Ok(pct)
    } else {
        Err(LedgerError::validation(format!(
            "Completion percentage must be between 0 and 100, got {pct}"
        )))
    }
}

pub fn validate_task_total(total: f64) -> Result<f64, LedgerError> {
    if total.is_finite() && total > 0.0 {
        Ok(total)
    } else {
        Err(LedgerError::validation(format!(
            "Task total must be a positive number, got {total}"
        )))
    }
}

/// Marks for a completion percentage: `total * pct / 100`, rounded to two
/// decimal places.
pub fn score(completion: i64, total: f64) -> f64 {
    round2(total * completion as f64 / 100.0)
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
