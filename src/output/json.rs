use serde_json::{json, Value};

use crate::db::record_repo::LedgerTotals;
use crate::error::LedgerError;
use crate::ledger::sentiment::SentimentSummary;
use crate::models::TaskRecord;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &LedgerError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn record_summary(r: &TaskRecord) -> Value {
    json!({
        "id": r.id,
        "title": r.title,
        "employee": r.employee,
        "status": r.status.as_str(),
        "completion": r.effective_completion(),
        "marks": r.marks
    })
}

pub fn record_json(r: &TaskRecord) -> Value {
    json!({
        "id": r.id,
        "company": r.company,
        "employee": r.employee,
        "title": r.title,
        "description": r.description,
        "employee_completion": r.employee_completion,
        "reviewer_completion": r.reviewer_completion,
        "marks": r.marks,
        "status": r.status.as_str(),
        "client_approval": r.client_approval.as_str(),
        "comments": r.comments,
        "created_at": r.created_at,
        "updated_at": r.updated_at
    })
}

pub fn totals_json(t: &LedgerTotals) -> Value {
    json!({
        "total": t.total,
        "submitted": t.submitted,
        "reviewed": t.reviewed,
        "completed": t.completed,
        "approved": t.approved,
        "rejected": t.rejected,
        "total_marks": (t.total_marks * 100.0).round() / 100.0,
        "average_marks": t.average_marks
    })
}

pub fn sentiment_json(s: &SentimentSummary) -> Value {
    json!({
        "positive": s.positive,
        "negative": s.negative,
        "neutral": s.neutral
    })
}
