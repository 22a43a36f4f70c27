use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::payment_service::PaymentService;
use crate::domain::coerce;
use crate::domain::errors::{INVALID_PAYLOAD, ORDER_NOT_FOUND};
use crate::domain::payment::{PaymentReceipt, RecordPayment};
use crate::errors::AppError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePaymentRequest {
    #[schema(value_type = i32)]
    pub order_id: Option<Value>,
    /// Number or numeric string, e.g. 20 or "20.00"
    #[schema(value_type = f64)]
    pub amount: Option<Value>,
    /// Free text, e.g. "card"
    pub method: Option<String>,
}

impl CreatePaymentRequest {
    fn into_command(self) -> Result<RecordPayment, AppError> {
        let invalid = || AppError::BadRequest(INVALID_PAYLOAD.to_string());
        let order_id = coerce::to_finite_number(self.order_id.as_ref()).ok_or_else(invalid)?;
        let amount = coerce::to_decimal(self.amount.as_ref()).ok_or_else(invalid)?;
        // A finite id that cannot name a row matches no order.
        let order_id = coerce::finite_to_id(order_id)
            .ok_or_else(|| AppError::NotFound(ORDER_NOT_FOUND.to_string()))?;

        Ok(RecordPayment {
            order_id,
            amount,
            method: self.method.filter(|m| !m.is_empty()),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatePaymentResponse {
    pub payment_id: i32,
    pub status: String,
}

impl From<PaymentReceipt> for CreatePaymentResponse {
    fn from(r: PaymentReceipt) -> Self {
        Self {
            payment_id: r.payment_id,
            status: r.status,
        }
    }
}

/// POST /payments
///
/// Records a payment for an existing order. No payment gateway is involved:
/// the status is always "success".
#[utoipa::path(
    post,
    path = "/payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = CreatePaymentResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "payments"
)]
pub async fn create_payment(
    service: web::Data<PaymentService>,
    body: web::Json<CreatePaymentRequest>,
) -> Result<HttpResponse, AppError> {
    let command = body.into_inner().into_command()?;

    let receipt = web::block(move || service.record_payment(command)).await??;

    Ok(HttpResponse::Created().json(CreatePaymentResponse::from(receipt)))
}
