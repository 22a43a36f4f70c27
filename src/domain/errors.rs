use thiserror::Error;

// Short machine-readable reasons returned to clients in `{"error": ...}`.
pub const INVALID_PAYLOAD: &str = "invalid payload";
pub const INVALID_PRODUCT_IDS: &str = "invalid product ids";
pub const MIXED_CURRENCIES: &str = "mixed currencies";
pub const BAD_ID: &str = "bad id";
pub const PRODUCT_NOT_FOUND: &str = "product not found";
pub const ORDER_NOT_FOUND: &str = "order not found";
pub const NOT_FOUND: &str = "not found";

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(reason: &str) -> Self {
        DomainError::NotFound(reason.to_string())
    }

    pub fn invalid(reason: &str) -> Self {
        DomainError::InvalidInput(reason.to_string())
    }
}
