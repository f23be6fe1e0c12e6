use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Role;

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "taskledger",
    version = VERSION,
    about = "Task completion review ledger CLI",
    after_help = "\
NOTE:
  DB is stored at <ledger-root>/.taskledger/ledger.db, where the ledger root
  is found by walking up from the current directory. Run `taskledger init`
  once, then `taskledger login` to set who is acting.

EXIT CODES:
  0  Success
  1  Error (validation, invalid transition, persistence, etc.)

LIFECYCLE:
  submit -> submitted --(review)--> reviewed --(approve|reject)--> completed
  Re-review is allowed while a record is still 'reviewed'.
  Completed records are immutable.

ROLES:
  employee  submit, view own records
  reviewer  review, view, export
  client    approve/reject, view, export

SCORING:
  marks = task_total * completion / 100, rounded to 2 decimals.
  Completion percentages outside 0-100 are rejected, never clamped.
  `review` without --completion uses the suggested value: a least-squares
  fit over the company's reviewed records (needs 3+), else the employee's
  own percentage."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the ledger in this directory
    Init {
        /// Maximum marks per task
        #[arg(long, default_value_t = crate::ledger::scoring::DEFAULT_TASK_TOTAL)]
        total: f64,
    },

    /// Set the acting role, company and user name
    Login {
        #[arg(long, value_enum)]
        role: Role,
        #[arg(long)]
        company: String,
        /// Your name
        #[arg(long)]
        name: String,
    },

    /// Submit a task with your completion percentage (employee)
    Submit {
        /// Task title
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// Completion percentage, 0-100
        #[arg(long)]
        completion: i64,
    },

    /// Review a submitted task: adjust completion, recompute marks (reviewer)
    Review {
        /// Record ID or prefix
        id: String,
        /// Adjusted completion percentage, 0-100; omitted = suggested value
        #[arg(long)]
        completion: Option<i64>,
        #[arg(long)]
        comments: Option<String>,
    },

    /// Approve a reviewed task (client, terminal)
    Approve {
        /// Record ID or prefix
        id: String,
    },

    /// Reject a reviewed task (client, terminal)
    Reject {
        /// Record ID or prefix
        id: String,
    },

    /// List task records, newest first
    List {
        /// Only records awaiting review
        #[arg(long, conflicts_with = "pending_approval")]
        pending_review: bool,
        /// Only records awaiting client approval
        #[arg(long)]
        pending_approval: bool,
        /// Keyword search over titles and descriptions, case-insensitive
        #[arg(long, conflicts_with_all = ["pending_review", "pending_approval"])]
        search: Option<String>,
    },

    /// Show full record details
    Show {
        /// Record ID or prefix
        id: String,
    },

    /// Company totals: per-status counts and marks
    Status,

    /// Export company records as CSV (reviewer/client)
    Export {
        /// Write to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Sentiment summary of reviewer comments
    Sentiment,
}
