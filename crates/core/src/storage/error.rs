use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Person",
            id: "42".to_string(),
        };
        assert_eq!(error.to_string(), "Person not found: 42");
    }

    #[test]
    fn test_already_exists_display() {
        let error = RepositoryError::AlreadyExists {
            entity_type: "Person",
            id: "7".to_string(),
        };
        assert_eq!(error.to_string(), "Person already exists: 7");
    }

    #[test]
    fn test_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("disk I/O error".to_string());
        assert_eq!(error.to_string(), "Connection failed: disk I/O error");
    }

    #[test]
    fn test_query_failed_display() {
        let error = RepositoryError::QueryFailed("NOT NULL constraint failed".to_string());
        assert_eq!(
            error.to_string(),
            "Query failed: NOT NULL constraint failed"
        );
    }

    #[test]
    fn test_invalid_data_display() {
        let error = RepositoryError::InvalidData("mobile must not be empty".to_string());
        assert_eq!(error.to_string(), "Invalid data: mobile must not be empty");
    }
}
