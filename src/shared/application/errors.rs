use crate::modules::attendance::use_cases::check_clock_in_allowed::gate::GateRejection;
use crate::modules::attendance::use_cases::clock_tokens::token::TokenRejection;
use crate::modules::attendance::use_cases::record_clock_action::decision::DecideError;
use crate::modules::corrections::core::request::CorrectionRejection;
use crate::shared::infrastructure::event_store::EventStoreError;
use serde::Serialize;
use thiserror::Error;

/// Coarse classification used by callers to pick a user-facing response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    State,
    Authorization,
    Conflict,
    NotFound,
    Expired,
    Unavailable,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::State => "state",
            ErrorKind::Authorization => "authorization",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Expired => "expired",
            ErrorKind::Unavailable => "unavailable",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Transition(#[from] DecideError),

    #[error(transparent)]
    Token(#[from] TokenRejection),

    #[error(transparent)]
    Schedule(#[from] GateRejection),

    #[error(transparent)]
    Correction(#[from] CorrectionRejection),

    #[error("{0}")]
    InvalidState(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("concurrent update, reload and retry: {0}")]
    Conflict(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("backend unavailable: {0}")]
    Backend(String),
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Validation(_) => ErrorKind::Validation,
            ApplicationError::Transition(_) | ApplicationError::InvalidState(_) => ErrorKind::State,
            ApplicationError::Token(rejection) => match rejection {
                TokenRejection::Expired => ErrorKind::Expired,
                TokenRejection::AlreadyConsumed => ErrorKind::Conflict,
                TokenRejection::Unknown | TokenRejection::ActionMismatch => {
                    ErrorKind::Authorization
                }
            },
            ApplicationError::Schedule(rejection) => match rejection {
                GateRejection::NoScheduledShift => ErrorKind::NotFound,
                GateRejection::TooEarly { .. } => ErrorKind::Expired,
            },
            ApplicationError::Correction(rejection) => match rejection {
                CorrectionRejection::EntryNotFound | CorrectionRejection::RequestNotFound => {
                    ErrorKind::NotFound
                }
                CorrectionRejection::AlreadyPending => ErrorKind::Conflict,
                CorrectionRejection::AlreadyResolved
                | CorrectionRejection::AlreadyCorrected { .. }
                | CorrectionRejection::EntryStillOpen => ErrorKind::State,
                CorrectionRejection::NothingProposed
                | CorrectionRejection::InvalidInterval
                | CorrectionRejection::MissingReason => ErrorKind::Validation,
            },
            ApplicationError::Forbidden(_) => ErrorKind::Authorization,
            ApplicationError::Conflict(_) => ErrorKind::Conflict,
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::Backend(_) => ErrorKind::Unavailable,
        }
    }
}

impl From<EventStoreError> for ApplicationError {
    fn from(error: EventStoreError) -> Self {
        match error {
            EventStoreError::VersionMismatch { .. } => ApplicationError::Conflict(error.to_string()),
            EventStoreError::Backend(message) => ApplicationError::Backend(message),
        }
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(error: anyhow::Error) -> Self {
        ApplicationError::Backend(error.to_string())
    }
}
