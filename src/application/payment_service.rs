use crate::domain::errors::DomainError;
use crate::domain::payment::{PaymentReceipt, RecordPayment};
use crate::domain::ports::PaymentRepository;

pub struct PaymentService {
    repo: Box<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(repo: impl PaymentRepository) -> Self {
        Self {
            repo: Box::new(repo),
        }
    }

    pub fn record_payment(&self, payment: RecordPayment) -> Result<PaymentReceipt, DomainError> {
        let order_id = payment.order_id;
        let amount = payment.amount.clone();
        let receipt = self.repo.record(payment)?;
        log::info!(
            "Recorded payment {} for order {} amount={} status={}",
            receipt.payment_id,
            order_id,
            amount,
            receipt.status
        );
        Ok(receipt)
    }
}
