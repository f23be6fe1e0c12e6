use std::env;
use std::fs;
use std::path::PathBuf;

use rusqlite::Connection;

use crate::error::LedgerError;

use super::migrations;

const DATA_DIR: &str = ".taskledger";

/// Find the ledger root by walking up from the current directory looking for
/// the `.taskledger` data directory created by `init`.
pub fn find_ledger_root() -> Result<PathBuf, LedgerError> {
    let mut dir = env::current_dir().map_err(|e| LedgerError::persistence(e.to_string()))?;
    loop {
        if dir.join(DATA_DIR).is_dir() {
            return Ok(dir);
        }
        if !dir.pop() {
            return Err(LedgerError::not_initialized());
        }
    }
}

/// Path to the ledger database.
pub fn db_path() -> Result<PathBuf, LedgerError> {
    let root = find_ledger_root()?;
    Ok(root.join(DATA_DIR).join("ledger.db"))
}

/// Path to the config file (task total and active session).
pub fn config_path() -> Result<PathBuf, LedgerError> {
    let root = find_ledger_root()?;
    Ok(root.join(DATA_DIR).join("config.json"))
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db() -> Result<Connection, LedgerError> {
    let path = db_path()?;
    if !path.exists() {
        return Err(LedgerError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Initialize the ledger: create the data directory in the current directory
/// (or reuse an existing ledger root above it), open the database, and run
/// migrations. Idempotent.
pub fn init_db() -> Result<PathBuf, LedgerError> {
    let root = match find_ledger_root() {
        Ok(root) => root,
        Err(_) => env::current_dir().map_err(|e| LedgerError::persistence(e.to_string()))?,
    };
    let path = root.join(DATA_DIR).join("ledger.db");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| LedgerError::persistence(e.to_string()))?;
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok(path)
}

fn configure_connection(conn: &Connection) -> Result<(), LedgerError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
