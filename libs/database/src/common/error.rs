/// Database infrastructure errors surfaced while connecting or probing health
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Errors reported by the MongoDB driver
    #[cfg(feature = "mongodb")]
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The server could not be reached, even after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection settings are unusable
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
