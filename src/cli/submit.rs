use chrono::{SecondsFormat, Utc};
use serde_json::json;

use crate::db::{connection, record_repo};
use crate::error::LedgerError;
use crate::ledger::scoring;
use crate::models::{new_record_id, Action, Approval, RecordStatus, TaskRecord};
use crate::output;

pub fn run(title: &str, description: Option<&str>, completion: i64, json_output: bool) -> i32 {
    match run_inner(title, description, completion) {
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
                    "Submitted task: {} ({}) at {}% -> {:.2} marks",
                    record.title, record.id, record.employee_completion, record.marks
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

fn run_inner(
    title: &str,
    description: Option<&str>,
    completion: i64,
) -> Result<TaskRecord, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::Submit)?;

    let title = title.trim();
    if title.is_empty() {
        return Err(LedgerError::validation("Task title must not be empty"));
    }
    let completion = scoring::validate_completion(completion)?;

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let record = TaskRecord {
        id: new_record_id(),
        company: session.company.clone(),
        employee: session.user.clone(),
        title: title.to_string(),
        description: description.map(|d| d.to_string()),
        employee_completion: completion,
        reviewer_completion: None,
        marks: scoring::score(completion, config.task_total),
        status: RecordStatus::Submitted,
        client_approval: Approval::Pending,
        comments: None,
        created_at: now.clone(),
        updated_at: now,
    };
    record_repo::create_record(&conn, &record)
}
