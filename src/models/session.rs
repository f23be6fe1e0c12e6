use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of acting roles. The ledger rules know nothing about roles;
/// the capability table below is enforced at the CLI boundary only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Reviewer,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Reviewer => "reviewer",
            Self::Client => "client",
        }
    }

    pub fn permits(&self, action: Action) -> bool {
        match (self, action) {
            (_, Action::View) => true,
            (Self::Employee, Action::Submit) => true,
            (Self::Reviewer, Action::Review) => true,
            (Self::Client, Action::Finalize) => true,
            (Self::Reviewer | Self::Client, Action::Export) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    Review,
    Finalize,
    View,
    Export,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submit => "submit tasks",
            Self::Review => "review tasks",
            Self::Finalize => "approve or reject tasks",
            Self::View => "view tasks",
            Self::Export => "export records",
        }
    }
}

/// Who is acting, as resolved by `taskledger login`. Trusted as given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub company: String,
    pub user: String,
    pub role: Role,
}
