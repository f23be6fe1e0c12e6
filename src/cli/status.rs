use serde_json::json;

use crate::db::{connection, record_repo};
use crate::error::LedgerError;
use crate::ledger::sentiment;
use crate::models::Action;
use crate::output;

pub fn run_status(json_output: bool) -> i32 {
    match status_inner() {
        Ok((company, totals)) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "company": company,
                        "totals": output::json::totals_json(&totals)
                    })))
                    .unwrap()
                );
            } else {
                println!("Company: {company}");
                output::text::print_totals(&totals);
            }
            0
        }
        Err(e) => error_exit(&e, json_output),
    }
}

pub fn run_sentiment(json_output: bool) -> i32 {
    match sentiment_inner() {
        Ok((company, summary)) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "company": company,
                        "sentiment": output::json::sentiment_json(&summary)
                    })))
                    .unwrap()
                );
            } else {
                println!("Company: {company}");
                output::text::print_sentiment(&summary);
            }
            0
        }
        Err(e) => error_exit(&e, json_output),
    }
}

fn status_inner() -> Result<(String, record_repo::LedgerTotals), LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::View)?;
    let totals = record_repo::company_totals(&conn, &session.company)?;
    Ok((session.company.clone(), totals))
}

fn sentiment_inner() -> Result<(String, sentiment::SentimentSummary), LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::View)?;

    let records = record_repo::list_by_company(&conn, &session.company)?;
    let summary = sentiment::summarize(
        records
            .iter()
            .filter_map(|r| r.comments.as_deref()),
    );
    Ok((session.company.clone(), summary))
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
