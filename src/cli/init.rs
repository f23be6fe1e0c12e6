use serde_json::json;

use crate::db::connection;
use crate::error::LedgerError;
use crate::ledger::scoring;
use crate::output;

pub fn run(total: f64, json_output: bool) -> i32 {
    match run_inner(total) {
        Ok((path, total)) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "path": path,
                        "task_total": total
                    })))
                    .unwrap()
                );
            } else {
                println!("Initialized taskledger at {path} (task total: {total})");
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

fn run_inner(total: f64) -> Result<(String, f64), LedgerError> {
    let total = scoring::validate_task_total(total)?;
    let path = connection::init_db()?;

    // Preserve any existing session across re-init; only the total changes.
    let mut config = super::login::load_config().unwrap_or_default();
    config.task_total = total;
    super::login::save_config(&config)?;

    Ok((path.to_string_lossy().into_owned(), total))
}
