use thiserror::Error;

/// Convenient result alias for the products library.
pub type Result<T> = std::result::Result<T, Error>;

/// Message used for every failed lookup by product id.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Message used when a search is issued without a name fragment.
pub const NAME_QUERY_REQUIRED: &str = "Name query required";

/// Top-level library error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Raised when no record matches the requested product id.
    #[error("{message}")]
    NotFound { message: String },

    /// Raised when a payload or query parameter fails validation.
    #[error("{message}")]
    Validation { message: String },
}

impl Error {
    /// Not-found error carrying the standard product message.
    pub fn product_not_found() -> Self {
        Self::NotFound {
            message: PRODUCT_NOT_FOUND.to_string(),
        }
    }

    /// Validation error with a caller-supplied message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status code associated with this failure kind.
    pub fn status(&self) -> u16 {
        match self {
            Error::NotFound { .. } => 404,
            Error::Validation { .. } => 400,
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Error::NotFound { message } | Error::Validation { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = Error::product_not_found();
        assert_eq!(err.status(), 404);
        assert_eq!(err.to_string(), "Product not found");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = Error::validation(NAME_QUERY_REQUIRED);
        assert_eq!(err.status(), 400);
        assert_eq!(err.message(), "Name query required");
    }
}
