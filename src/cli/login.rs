use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::db::connection;
use crate::error::LedgerError;
use crate::ledger::scoring;
use crate::models::{Action, Role, Session};
use crate::output;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub task_total: f64,
    pub session: Option<Session>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task_total: scoring::DEFAULT_TASK_TOTAL,
            session: None,
        }
    }
}

/// Read config.json; a missing file means defaults (empty ledger start).
pub fn load_config() -> Result<Config, LedgerError> {
    let path = connection::config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let content =
        fs::read_to_string(&path).map_err(|e| LedgerError::persistence(e.to_string()))?;
    serde_json::from_str(&content)
        .map_err(|e| LedgerError::persistence(format!("Invalid config file: {e}")))
}

pub fn save_config(config: &Config) -> Result<(), LedgerError> {
    let path = connection::config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LedgerError::persistence(e.to_string()))?;
    }
    fs::write(&path, serde_json::to_string_pretty(config).unwrap())
        .map_err(|e| LedgerError::persistence(e.to_string()))
}

pub fn require_session(config: &Config) -> Result<&Session, LedgerError> {
    config.session.as_ref().ok_or_else(LedgerError::no_session)
}

/// Capability check at the presentation boundary; the ledger rules never see
/// a role.
pub fn require_permission(session: &Session, action: Action) -> Result<(), LedgerError> {
    if session.role.permits(action) {
        Ok(())
    } else {
        Err(LedgerError::role_not_permitted(
            session.role.as_str(),
            action.as_str(),
        ))
    }
}

pub fn run(role: Role, company: &str, name: &str, json_output: bool) -> i32 {
    match run_inner(role, company, name) {
        Ok(session) => {
            if json_output {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&output::json::success(json!({
                        "session": {
                            "company": session.company,
                            "user": session.user,
                            "role": session.role.as_str()
                        }
                    })))
                    .unwrap()
                );
            } else {
                println!(
                    "Logged in as {} ({}) at {}",
                    session.user,
                    session.role.as_str(),
                    session.company
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

fn run_inner(role: Role, company: &str, name: &str) -> Result<Session, LedgerError> {
    // Fails with NOT_INITIALIZED before any session is written.
    let _conn = connection::open_db()?;

    let company = company.trim();
    let name = name.trim();
    if company.is_empty() {
        return Err(LedgerError::validation("Company name must not be empty"));
    }
    if name.is_empty() {
        return Err(LedgerError::validation("User name must not be empty"));
    }

    let session = Session {
        company: company.to_string(),
        user: name.to_string(),
        role,
    };
    let mut config = load_config()?;
    config.session = Some(session.clone());
    save_config(&config)?;
    Ok(session)
}
