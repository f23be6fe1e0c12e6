use serde_json::json;

use crate::db::{connection, record_repo};
use crate::error::LedgerError;
use crate::models::{Action, RecordStatus, Role, TaskRecord};
use crate::output;

pub fn run_list(
    pending_review: bool,
    pending_approval: bool,
    search: Option<&str>,
    json_output: bool,
) -> i32 {
    match list_inner(pending_review, pending_approval, search) {
        Ok(records) => {
            if json_output {
                let records_json: Vec<_> =
                    records.iter().map(output::json::record_summary).collect();
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "records": records_json
                    })))
                    .unwrap()
                );
            } else {
                output::text::print_record_list(&records);
            }
            0
        }
        Err(e) => error_exit(&e, json_output),
    }
}

pub fn run_show(id: &str, json_output: bool) -> i32 {
    match show_inner(id) {
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
                output::text::print_record(&record);
            }
            0
        }
        Err(e) => error_exit(&e, json_output),
    }
}

fn list_inner(
    pending_review: bool,
    pending_approval: bool,
    search: Option<&str>,
) -> Result<Vec<TaskRecord>, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::View)?;

    // Employees see only their own submissions, whatever the view.
    let own = match session.role {
        Role::Employee => Some(session.user.as_str()),
        Role::Reviewer | Role::Client => None,
    };

    if pending_review {
        return record_repo::list_by_status(&conn, &session.company, RecordStatus::Submitted, own);
    }
    if pending_approval {
        return record_repo::list_by_status(&conn, &session.company, RecordStatus::Reviewed, own);
    }
    if let Some(query) = search {
        return record_repo::search_records(&conn, &session.company, own, query);
    }
    match own {
        Some(employee) => record_repo::list_by_employee(&conn, &session.company, employee),
        None => record_repo::list_by_company(&conn, &session.company),
    }
}

fn show_inner(id: &str) -> Result<TaskRecord, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::View)?;
    record_repo::resolve_record(&conn, &session.company, id)
}

fn error_exit(e: &LedgerError, json_output: bool) -> i32 {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&output::json::error(e)).unwrap()
        );
    } else {
        eprintln!("Error: {}", e.message);
    }
    1
}
