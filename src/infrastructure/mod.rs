pub mod catalog_repo;
pub mod models;
pub mod order_repo;
pub mod payment_repo;
#[cfg(test)]
pub(crate) mod test_db;

pub use catalog_repo::DieselCatalogRepository;
pub use order_repo::DieselOrderRepository;
pub use payment_repo::DieselPaymentRepository;

use crate::domain::errors::DomainError;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}
