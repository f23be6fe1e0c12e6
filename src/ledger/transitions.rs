//! The record lifecycle: Submitted → Reviewed → Completed. Status only
//! advances; the one permitted repeat is re-review before the client has
//! finalized.

use crate::error::LedgerError;
use crate::models::RecordStatus;

/// A reviewer may act on a record that is submitted, or re-review one that
/// is reviewed but not yet finalized. Completed records are immutable.
pub fn check_review(current: RecordStatus) -> Result<RecordStatus, LedgerError> {
    match current {
        RecordStatus::Submitted | RecordStatus::Reviewed => Ok(RecordStatus::Reviewed),
        RecordStatus::Completed => Err(LedgerError::invalid_transition(current.as_str(), "review")),
    }
}

/// A client decision is only legal once a reviewer has acted.
pub fn check_finalize(current: RecordStatus) -> Result<RecordStatus, LedgerError> {
    match current {
        RecordStatus::Reviewed => Ok(RecordStatus::Completed),
        RecordStatus::Submitted | RecordStatus::Completed => Err(
            LedgerError::invalid_transition(current.as_str(), "finalize"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_review_from_submitted() {
        assert_eq!(
            check_review(RecordStatus::Submitted).unwrap(),
            RecordStatus::Reviewed
        );
    }

    #[test]
    fn test_re_review_before_finalize() {
        assert_eq!(
            check_review(RecordStatus::Reviewed).unwrap(),
            RecordStatus::Reviewed
        );
    }

    #[test]
    fn test_review_after_completed_is_invalid() {
        let err = check_review(RecordStatus::Completed).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
    }

    #[test]
    fn test_finalize_requires_review() {
        let err = check_finalize(RecordStatus::Submitted).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidState);
        assert_eq!(
            check_finalize(RecordStatus::Reviewed).unwrap(),
            RecordStatus::Completed
        );
    }

    #[test]
    fn test_completed_is_terminal() {
        assert!(check_review(RecordStatus::Completed).is_err());
        assert!(check_finalize(RecordStatus::Completed).is_err());
    }
}
