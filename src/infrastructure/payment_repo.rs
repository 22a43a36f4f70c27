use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::{DomainError, ORDER_NOT_FOUND};
use crate::domain::payment::{PaymentReceipt, RecordPayment, PAYMENT_STATUS_SUCCESS};
use crate::domain::ports::PaymentRepository;
use crate::schema::{orders, payments};

use super::models::NewPaymentRow;

pub struct DieselPaymentRepository {
    pool: DbPool,
}

impl DieselPaymentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl PaymentRepository for DieselPaymentRepository {
    fn record(&self, payment: RecordPayment) -> Result<PaymentReceipt, DomainError> {
        let mut conn = self.pool.get()?;

        let order_id = orders::table
            .filter(orders::id.eq(payment.order_id))
            .select(orders::id)
            .first::<i32>(&mut conn)
            .optional()?
            .ok_or_else(|| DomainError::not_found(ORDER_NOT_FOUND))?;

        let (payment_id, created_at) = diesel::insert_into(payments::table)
            .values(&NewPaymentRow {
                order_id,
                amount: &payment.amount,
                status: PAYMENT_STATUS_SUCCESS,
                method: payment.method.as_deref(),
            })
            .returning((payments::id, payments::created_at))
            .get_result::<(i32, DateTime<Utc>)>(&mut conn)?;

        Ok(PaymentReceipt {
            payment_id,
            status: PAYMENT_STATUS_SUCCESS.to_string(),
            created_at,
        })
    }
}
