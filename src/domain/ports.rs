use super::catalog::{Category, Product, ProductFilter};
use super::errors::DomainError;
use super::order::{OrderView, PlaceOrder, PlacedOrder};
use super::payment::{PaymentReceipt, RecordPayment};

pub trait CatalogRepository: Send + Sync + 'static {
    /// Round-trip to the store, used by the health check.
    fn ping(&self) -> Result<(), DomainError>;
    fn list_categories(&self) -> Result<Vec<Category>, DomainError>;
    fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, DomainError>;
    fn find_product(&self, id: i32) -> Result<Option<Product>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Place an order atomically: price lines, upsert the customer, write the
    /// order and its items. On error nothing is persisted.
    fn place(&self, order: PlaceOrder) -> Result<PlacedOrder, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<OrderView>, DomainError>;
}

pub trait PaymentRepository: Send + Sync + 'static {
    /// Record a payment against an existing order. Fails with `NotFound` when
    /// the order does not exist.
    fn record(&self, payment: RecordPayment) -> Result<PaymentReceipt, DomainError>;
}
