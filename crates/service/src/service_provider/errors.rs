use thiserror::Error;

/// Failures of service provider persistence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceProviderError {
    /// Zero rows (or more than one) where exactly one was expected.
    #[error("service provider not found: {0}")]
    NotFound(String),
    /// Another provider already uses this entity ID in the zone.
    #[error("service provider already exists: {0}")]
    AlreadyExists(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("data integrity violation: {0}")]
    IntegrityViolation(String),
    #[error("invalid service provider config: {0}")]
    InvalidConfig(String),
    #[error("store error: {0}")]
    Store(String),
}

impl ServiceProviderError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceProviderError::NotFound(_) => 2001,
            ServiceProviderError::AlreadyExists(_) => 2002,
            ServiceProviderError::InvalidArgument(_) => 2003,
            ServiceProviderError::IntegrityViolation(_) => 2004,
            ServiceProviderError::InvalidConfig(_) => 2101,
            ServiceProviderError::Store(_) => 2200,
        }
    }

    pub(crate) fn incorrect_result_size(what: &str, actual: usize) -> Self {
        Self::NotFound(format!("{what}: expected 1 row, found {actual}"))
    }
}

impl From<sea_orm::DbErr> for ServiceProviderError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceProviderError::Store(e.to_string())
    }
}
