use crate::domain::errors::{DomainError, INVALID_PAYLOAD};
use crate::domain::order::{OrderView, PlaceOrder, PlacedOrder};
use crate::domain::ports::OrderRepository;

pub struct OrderService {
    repo: Box<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: impl OrderRepository) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn place_order(&self, order: PlaceOrder) -> Result<PlacedOrder, DomainError> {
        if order.lines.is_empty() {
            return Err(DomainError::invalid(INVALID_PAYLOAD));
        }
        let order = PlaceOrder {
            customer: order.customer.normalized(),
            ..order
        };
        let placed = self.repo.place(order)?;
        log::info!(
            "Placed order {} total={} {}",
            placed.id,
            placed.total,
            placed.currency
        );
        Ok(placed)
    }

    pub fn get_order(&self, id: i32) -> Result<Option<OrderView>, DomainError> {
        self.repo.find_by_id(id)
    }
}
