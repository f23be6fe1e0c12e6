use rusqlite::{params, Connection};

use crate::error::LedgerError;
use crate::ledger::scoring;
use crate::models::{Approval, RecordStatus, TaskRecord};

const COLUMNS: &str = "id, company, employee, title, description, employee_completion, \
     reviewer_completion, marks, status, client_approval, comments, created_at, updated_at";

pub fn create_record(conn: &Connection, record: &TaskRecord) -> Result<TaskRecord, LedgerError> {
    conn.execute(
        "INSERT INTO records (id, company, employee, title, description, employee_completion,
             reviewer_completion, marks, status, client_approval, comments, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            record.id,
            record.company,
            record.employee,
            record.title,
            record.description,
            record.employee_completion,
            record.reviewer_completion,
            record.marks,
            record.status.as_str(),
            record.client_approval.as_str(),
            record.comments,
            record.created_at,
            record.updated_at,
        ],
    )?;
    get_record_by_id(conn, &record.id)
}

pub fn get_record_by_id(conn: &Connection, id: &str) -> Result<TaskRecord, LedgerError> {
    conn.query_row(
        &format!("SELECT {COLUMNS} FROM records WHERE id = ?1"),
        params![id],
        row_to_record,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => LedgerError::record_not_found(id),
        _ => LedgerError::from(e),
    })
}

/// Resolve a record by ID or unique ID prefix within a company.
pub fn resolve_record(
    conn: &Connection,
    company: &str,
    reference: &str,
) -> Result<TaskRecord, LedgerError> {
    // Exact ID match first
    if let Ok(record) = get_record_by_id(conn, reference) {
        if record.company == company {
            return Ok(record);
        }
    }

    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM records WHERE company = ?1 AND id LIKE ?2"
    ))?;
    let prefix = format!("{reference}%");
    let records: Vec<TaskRecord> = stmt
        .query_map(params![company, prefix], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;

    match records.len() {
        0 => Err(LedgerError::record_not_found(reference)),
        1 => Ok(records.into_iter().next().unwrap()),
        _ => {
            let candidates: Vec<String> = records
                .iter()
                .map(|r| format!("{} ({})", r.title, r.id))
                .collect();
            Err(LedgerError::ambiguous_ref(reference, &candidates))
        }
    }
}

/// All records for a company, newest first. ULID ids break created_at ties.
pub fn list_by_company(conn: &Connection, company: &str) -> Result<Vec<TaskRecord>, LedgerError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM records WHERE company = ?1
         ORDER BY created_at DESC, id DESC"
    ))?;
    let records = stmt
        .query_map(params![company], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// An employee's own records, newest first.
pub fn list_by_employee(
    conn: &Connection,
    company: &str,
    employee: &str,
) -> Result<Vec<TaskRecord>, LedgerError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM records WHERE company = ?1 AND employee = ?2
         ORDER BY created_at DESC, id DESC"
    ))?;
    let records = stmt
        .query_map(params![company, employee], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Records in one status. `employee` narrows the view to that employee's
/// own submissions.
pub fn list_by_status(
    conn: &Connection,
    company: &str,
    status: RecordStatus,
    employee: Option<&str>,
) -> Result<Vec<TaskRecord>, LedgerError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM records
         WHERE company = ?1 AND status = ?2 AND (?3 IS NULL OR employee = ?3)
         ORDER BY created_at DESC, id DESC"
    ))?;
    let records = stmt
        .query_map(params![company, status.as_str(), employee], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// Case-insensitive keyword search over task titles and descriptions.
pub fn search_records(
    conn: &Connection,
    company: &str,
    employee: Option<&str>,
    query: &str,
) -> Result<Vec<TaskRecord>, LedgerError> {
    let pattern = format!("%{}%", escape_like(query));
    let mut stmt = conn.prepare(&format!(
        "SELECT {COLUMNS} FROM records
         WHERE company = ?1 AND (?2 IS NULL OR employee = ?2)
           AND (title LIKE ?3 ESCAPE '\\' OR description LIKE ?3 ESCAPE '\\')
         ORDER BY created_at DESC, id DESC"
    ))?;
    let records = stmt
        .query_map(params![company, employee, pattern], row_to_record)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records)
}

/// LIKE wildcards in user input match literally.
fn escape_like(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn apply_review(
    conn: &Connection,
    id: &str,
    reviewer_completion: i64,
    marks: f64,
    comments: Option<&str>,
    now: &str,
) -> Result<(), LedgerError> {
    conn.execute(
        "UPDATE records
         SET reviewer_completion = ?1,
             marks = ?2,
             status = 'reviewed',
             comments = COALESCE(?3, comments),
             updated_at = ?4
         WHERE id = ?5",
        params![reviewer_completion, marks, comments, now, id],
    )?;
    Ok(())
}

pub fn apply_decision(
    conn: &Connection,
    id: &str,
    decision: Approval,
    now: &str,
) -> Result<(), LedgerError> {
    conn.execute(
        "UPDATE records
         SET client_approval = ?1,
             status = 'completed',
             updated_at = ?2
         WHERE id = ?3",
        params![decision.as_str(), now, id],
    )?;
    Ok(())
}

/// (employee_completion, reviewer_completion) pairs of reviewed records,
/// used to fit the reviewer-completion suggestion.
pub fn reviewed_pairs(conn: &Connection, company: &str) -> Result<Vec<(f64, f64)>, LedgerError> {
    let mut stmt = conn.prepare(
        "SELECT employee_completion, reviewer_completion FROM records
         WHERE company = ?1 AND reviewer_completion IS NOT NULL",
    )?;
    let pairs = stmt
        .query_map(params![company], |row| {
            Ok((row.get::<_, f64>(0)?, row.get::<_, f64>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(pairs)
}

/// Per-status counts and mark totals for a company.
pub fn company_totals(conn: &Connection, company: &str) -> Result<LedgerTotals, LedgerError> {
    let mut totals = LedgerTotals::default();

    let mut stmt =
        conn.prepare("SELECT status, COUNT(*) FROM records WHERE company = ?1 GROUP BY status")?;
    let rows = stmt.query_map(params![company], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for row in rows {
        let (status, count) = row?;
        match status.as_str() {
            "submitted" => totals.submitted = count,
            "reviewed" => totals.reviewed = count,
            "completed" => totals.completed = count,
            _ => {}
        }
    }
    totals.total = totals.submitted + totals.reviewed + totals.completed;

    let mut stmt = conn.prepare(
        "SELECT client_approval, COUNT(*) FROM records
         WHERE company = ?1 AND status = 'completed' GROUP BY client_approval",
    )?;
    let rows = stmt.query_map(params![company], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for row in rows {
        let (approval, count) = row?;
        match approval.as_str() {
            "approved" => totals.approved = count,
            "rejected" => totals.rejected = count,
            _ => {}
        }
    }

    totals.total_marks = conn.query_row(
        "SELECT COALESCE(SUM(marks), 0) FROM records WHERE company = ?1",
        params![company],
        |row| row.get(0),
    )?;
    totals.average_marks = if totals.total > 0 {
        scoring::round2(totals.total_marks / totals.total as f64)
    } else {
        0.0
    };
    Ok(totals)
}

#[derive(Debug, Default, Clone, serde::Serialize)]
pub struct LedgerTotals {
    pub total: i64,
    pub submitted: i64,
    pub reviewed: i64,
    pub completed: i64,
    pub approved: i64,
    pub rejected: i64,
    pub total_marks: f64,
    pub average_marks: f64,
}

fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<TaskRecord> {
    Ok(TaskRecord {
        id: row.get(0)?,
        company: row.get(1)?,
        employee: row.get(2)?,
        title: row.get(3)?,
        description: row.get(4)?,
        employee_completion: row.get(5)?,
        reviewer_completion: row.get(6)?,
        marks: row.get(7)?,
        status: RecordStatus::from_str(&row.get::<_, String>(8)?)
            .unwrap_or(RecordStatus::Submitted),
        client_approval: Approval::from_str(&row.get::<_, String>(9)?)
            .unwrap_or(Approval::Pending),
        comments: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}
