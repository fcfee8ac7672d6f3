//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(
        "Request path id ({path_id}) and request body id ({}) must match",
        .body_id.as_deref().unwrap_or("none")
    )]
    IdMismatch {
        path_id: String,
        body_id: Option<String>,
    },

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Lift a repository failure into the domain, attaching the entity that was addressed.
    pub fn from_repo(err: RepoError, entity_type: &'static str, id: Uuid) -> Self {
        match err {
            RepoError::NotFound => DomainError::NotFound { entity_type, id },
            other => other.into(),
        }
    }
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Connection(msg) => DomainError::Unavailable(msg),
            RepoError::Query(msg) => DomainError::Internal(msg),
            RepoError::Constraint(msg) => DomainError::Internal(msg),
            RepoError::NotFound => DomainError::Internal("entity not found".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_mismatch_message_names_both_ids() {
        let err = DomainError::IdMismatch {
            path_id: "abc".to_string(),
            body_id: Some("def".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request path id (abc) and request body id (def) must match"
        );

        let err = DomainError::IdMismatch {
            path_id: "abc".to_string(),
            body_id: None,
        };
        assert_eq!(
            err.to_string(),
            "Request path id (abc) and request body id (none) must match"
        );
    }

    #[test]
    fn missing_field_message() {
        assert_eq!(
            DomainError::MissingField("author").to_string(),
            "Missing `author` in request body"
        );
    }

    #[test]
    fn repo_not_found_keeps_entity_context() {
        let id = Uuid::new_v4();
        let err = DomainError::from_repo(RepoError::NotFound, "BlogPost", id);
        assert!(matches!(err, DomainError::NotFound { id: found, .. } if found == id));

        let err = DomainError::from_repo(RepoError::Connection("down".into()), "BlogPost", id);
        assert!(matches!(err, DomainError::Unavailable(_)));
    }
}
