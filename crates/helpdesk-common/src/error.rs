//! Error types for the helpdesk core

use thiserror::Error;

/// Contract-breach errors at the domain boundary.
///
/// These indicate upstream data-integrity problems (an unknown role string
/// reaching the engine), not normal policy denials. Denials live in
/// `helpdesk-policy` and are ordinary outcomes, never errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Unrecognized role value
    #[error("invalid role: {0}")]
    InvalidRole(String),

    /// Unrecognized ticket status value
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    /// Unrecognized ticket priority value
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
}

/// Result type for domain boundary parsing
pub type DomainResult<T> = Result<T, DomainError>;
