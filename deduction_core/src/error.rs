//! Errors raised by a play session.

use case_rules::CaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Case(#[from] CaseError),

    #[error("no suspect named '{0}' in this case")]
    UnknownSuspect(String),
}

pub type SessionResult<T> = Result<T, SessionError>;
