use std::fs;
use std::path::Path;

use serde_json::json;

use crate::db::{connection, record_repo};
use crate::error::LedgerError;
use crate::models::Action;
use crate::output;

pub fn run(out: Option<&Path>, json_output: bool) -> i32 {
    match run_inner(out) {
        Ok(Exported::File { path, rows }) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "path": path,
                        "rows": rows
                    })))
                    .unwrap()
                );
            } else {
                println!("Exported {rows} records to {path}");
            }
            0
        }
        Ok(Exported::Stdout { csv }) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({ "csv": csv })))
                        .unwrap()
                );
            } else {
                print!("{csv}");
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

enum Exported {
    File { path: String, rows: usize },
    Stdout { csv: String },
}

fn run_inner(out: Option<&Path>) -> Result<Exported, LedgerError> {
    let conn = connection::open_db()?;
    let config = super::login::load_config()?;
    let session = super::login::require_session(&config)?;
    super::login::require_permission(session, Action::Export)?;

    let records = record_repo::list_by_company(&conn, &session.company)?;
    let csv = output::csv::render(&records);

    match out {
        Some(path) => {
            fs::write(path, &csv).map_err(|e| LedgerError::persistence(e.to_string()))?;
            Ok(Exported::File {
                path: path.to_string_lossy().into_owned(),
                rows: records.len(),
            })
        }
        None => Ok(Exported::Stdout { csv }),
    }
}
