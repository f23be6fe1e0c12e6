use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use serde_json::json;

use crate::db::{connection, record_repo};
use crate::error::LedgerError;
use crate::ledger::{scoring, suggest, transitions};
use crate::models::{Action, Approval, TaskRecord};
use crate::output;

pub fn run_review(
    id: &str,
    completion: Option<i64>,
    comments: Option<&str>,
    json_output: bool,
) -> i32 {
    report(review_inner(id, completion, comments), json_output)
}

pub fn run_finalize(id: &str, decision: Approval, json_output: bool) -> i32 {
    report(finalize_inner(id, decision), json_output)
}

fn report(result: Result<TaskRecord, LedgerError>, json_output: bool) -> i32 {
    match result {
        Ok(record) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "record": output::json::record_json(&record)
                    })))
                    .unwrap()
                );
            } else {
                println!(
                    "Task {} -> {} ({:.2} marks, approval: {})",
                    record.id,
                    record.status.as_str(),
                    record.marks,
                    record.client_approval.as_str()
                );
            }
            0
        }
        Err(e) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::error(&e)).unwrap()
                );
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}

fn review_inner(
    id: &str,
    completion: Option<i64>,
    comments: Option<&str>,
) -> Result<TaskRecord, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::Review)?;

    // Validate before the transaction: a rejected review leaves no trace.
    if let Some(pct) = completion {
        scoring::validate_completion(pct)?;
    }

    conn.execute_batch("BEGIN IMMEDIATE")?;
    let result = (|| -> Result<TaskRecord, LedgerError> {
        let record = record_repo::resolve_record(&conn, &session.company, id)?;
        transitions::check_review(record.status)?;

        let pct = match completion {
            Some(pct) => pct,
            None => suggested_completion(&conn, &session.company, &record)?,
        };
        let marks = scoring::score(pct, config.task_total);
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        record_repo::apply_review(&conn, &record.id, pct, marks, comments, &now)?;
        record_repo::get_record_by_id(&conn, &record.id)
    })();

    match result {
        Ok(record) => {
            conn.execute_batch("COMMIT")?;
            Ok(record)
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}

/// Default adjustment when the reviewer gives no figure: the fitted value
/// once enough reviews exist, the employee's own figure until then.
fn suggested_completion(
    conn: &Connection,
    company: &str,
    record: &TaskRecord,
) -> Result<i64, LedgerError> {
    let pairs = record_repo::reviewed_pairs(conn, company)?;
    let pct = match suggest::fit(&pairs) {
        Some(fit) => fit.predict(record.employee_completion as f64).round() as i64,
        None => record.employee_completion,
    };
    scoring::validate_completion(pct)
}

fn finalize_inner(id: &str, decision: Approval) -> Result<TaskRecord, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::Finalize)?;

    conn.execute_batch("BEGIN IMMEDIATE")?;
    let result = (|| -> Result<TaskRecord, LedgerError> {
        let record = record_repo::resolve_record(&conn, &session.company, id)?;
        transitions::check_finalize(record.status)?;

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        record_repo::apply_decision(&conn, &record.id, decision, &now)?;
        record_repo::get_record_by_id(&conn, &record.id)
    })();

    match result {
        Ok(record) => {
            conn.execute_batch("COMMIT")?;
            Ok(record)
        }
        Err(e) => {
            let _ = conn.execute_batch("ROLLBACK");
            Err(e)
        }
    }
}
