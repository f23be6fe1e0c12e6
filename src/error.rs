use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    NoSession,
    RecordNotFound,
    AmbiguousRef,
    InvalidState,
    RoleNotPermitted,
    ValidationError,
    PersistenceError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::NoSession => "NO_SESSION",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::AmbiguousRef => "AMBIGUOUS_REF",
            Self::InvalidState => "INVALID_STATE",
            Self::RoleNotPermitted => "ROLE_NOT_PERMITTED",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::PersistenceError => "PERSISTENCE_ERROR",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct LedgerError {
    pub code: ErrorCode,
    pub message: String,
}

impl LedgerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "taskledger is not initialized. Run `taskledger init` first.",
        )
    }

    pub fn no_session() -> Self {
        Self::new(
            ErrorCode::NoSession,
            "No active session. Run `taskledger login --role <role> --company <company> --name <name>` first.",
        )
    }

    pub fn record_not_found(reference: &str) -> Self {
        Self::new(
            ErrorCode::RecordNotFound,
            format!("Task record not found: {reference}"),
        )
    }

    pub fn ambiguous_ref(reference: &str, candidates: &[String]) -> Self {
        Self::new(
            ErrorCode::AmbiguousRef,
            format!(
                "Ambiguous reference '{}'. Candidates: {}",
                reference,
                candidates.join(", ")
            ),
        )
    }

    pub fn invalid_transition(from: &str, action: &str) -> Self {
        Self::new(
            ErrorCode::InvalidState,
            format!("Cannot {action} a record in status '{from}'"),
        )
    }

    pub fn role_not_permitted(role: &str, action: &str) -> Self {
        Self::new(
            ErrorCode::RoleNotPermitted,
            format!("Role '{role}' is not permitted to {action}"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PersistenceError, message)
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(e: rusqlite::Error) -> Self {
        Self::persistence(e.to_string())
    }
}
