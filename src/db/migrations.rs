use rusqlite::Connection;

use crate::error::LedgerError;

pub fn run_migrations(conn: &Connection) -> Result<(), LedgerError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS records (
            id TEXT PRIMARY KEY,
            company TEXT NOT NULL,
            employee TEXT NOT NULL,
            title TEXT NOT NULL,
            description TEXT,
            employee_completion INTEGER NOT NULL
                CHECK (employee_completion BETWEEN 0 AND 100),
            reviewer_completion INTEGER
                CHECK (reviewer_completion BETWEEN 0 AND 100),
            marks REAL NOT NULL DEFAULT 0
                CHECK (marks >= 0),
            status TEXT NOT NULL DEFAULT 'submitted'
                CHECK (status IN ('submitted', 'reviewed', 'completed')),
            client_approval TEXT NOT NULL DEFAULT 'pending'
                CHECK (client_approval IN ('pending', 'approved', 'rejected')),
            comments TEXT,
            created_at TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_records_company_created
            ON records(company, created_at DESC);
        CREATE INDEX IF NOT EXISTS idx_records_company_status
            ON records(company, status);
        ",
    )?;
    Ok(())
}
