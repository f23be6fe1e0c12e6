use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Submitted,
    Reviewed,
    Completed,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "submitted",
            Self::Reviewed => "reviewed",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "submitted" => Some(Self::Submitted),
            "reviewed" => Some(Self::Reviewed),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Approval {
    Pending,
    Approved,
    Rejected,
}

impl Approval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "approved" => Some(Self::Approved),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// One task submission and its review history. `marks` is always derived
/// from the relevant completion percentage, never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub company: String,
    pub employee: String,
    pub title: String,
    pub description: Option<String>,
    pub employee_completion: i64,
    pub reviewer_completion: Option<i64>,
    pub marks: f64,
    pub status: RecordStatus,
    pub client_approval: Approval,
    pub comments: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl TaskRecord {
    /// The completion value that currently drives `marks`: the reviewer's
    /// adjustment once one exists, the employee's own figure until then.
    pub fn effective_completion(&self) -> i64 {
        self.reviewer_completion.unwrap_or(self.employee_completion)
    }
}

/// Fresh opaque record id. ULIDs are time-ordered, which keeps id ties in
/// created_at ordering stable.
pub fn new_record_id() -> String {
    ulid::Ulid::new().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_status_round_trip() {
        for s in [
            RecordStatus::Submitted,
            RecordStatus::Reviewed,
            RecordStatus::Completed,
        ] {
            assert_eq!(RecordStatus::from_str(s.as_str()), Some(s));
        }
        assert_eq!(RecordStatus::from_str("draft"), None);
    }

    #[test]
    fn test_only_completed_is_terminal() {
        assert!(!RecordStatus::Submitted.is_terminal());
        assert!(!RecordStatus::Reviewed.is_terminal());
        assert!(RecordStatus::Completed.is_terminal());
    }

    #[test]
    fn test_effective_completion_prefers_reviewer() {
        let mut r = sample_record();
        assert_eq!(r.effective_completion(), 40);
        r.reviewer_completion = Some(80);
        assert_eq!(r.effective_completion(), 80);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let ids: HashSet<String> = (0..1000).map(|_| new_record_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    fn sample_record() -> TaskRecord {
        TaskRecord {
            id: new_record_id(),
            company: "Acme".into(),
            employee: "Alice".into(),
            title: "Deploy".into(),
            description: None,
            employee_completion: 40,
            reviewer_completion: None,
            marks: 2.0,
            status: RecordStatus::Submitted,
            client_approval: Approval::Pending,
            comments: None,
            created_at: "2026-01-01T00:00:00Z".into(),
            updated_at: "2026-01-01T00:00:00Z".into(),
        }
    }
}
