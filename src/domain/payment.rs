use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};

/// No payment gateway is called; every recorded payment is a success.
pub const PAYMENT_STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq)]
pub struct RecordPayment {
    pub order_id: i32,
    pub amount: BigDecimal,
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub payment_id: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
