//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for domain entities.
//! Every entity carries a backend-assigned identifier.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Clone + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// The request never produced a response (network, CORS, bad URL)
    Request(String),
    /// The backend answered with a non-success status
    Status { status: u16, message: String },
    /// The response body did not match the expected shape
    Decode(String),
    InvalidInput(String),
    NotFound(String),
}

impl DomainError {
    /// Whether the backend actually answered
    pub fn has_response(&self) -> bool {
        matches!(self, DomainError::Status { .. } | DomainError::Decode(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Request(msg) => write!(f, "Request failed: {}", msg),
            DomainError::Status { status, message } if message.is_empty() => {
                write!(f, "Server responded with status {}", status)
            }
            DomainError::Status { status, message } => {
                write!(f, "Server responded with status {}: {}", status, message)
            }
            DomainError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

/// Dashboard action a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
    ToggleAvailability,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::ToggleAvailability => "toggle_availability",
        }
    }

    /// Human-readable phrase for toasts ("Could not {describe}")
    pub fn describe(&self) -> &'static str {
        match self {
            Operation::Load => "load the menu",
            Operation::Create => "add the dish",
            Operation::Update => "save the dish",
            Operation::Delete => "remove the dish",
            Operation::ToggleAvailability => "change availability",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = DomainError::Status { status: 500, message: String::new() };
        assert_eq!(err.to_string(), "Server responded with status 500");

        let err = DomainError::Status { status: 404, message: "no such food".to_string() };
        assert_eq!(err.to_string(), "Server responded with status 404: no such food");
    }

    #[test]
    fn test_has_response() {
        assert!(!DomainError::Request("offline".into()).has_response());
        assert!(DomainError::Decode("bad json".into()).has_response());
        assert!(!DomainError::InvalidInput("name".into()).has_response());
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::ToggleAvailability.to_string(), "toggle_availability");
        assert_eq!(Operation::Create.describe(), "add the dish");
    }
}
