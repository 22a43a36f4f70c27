use actix_web::{web, HttpResponse};
use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::application::order_service::OrderService;
use crate::domain::coerce;
use crate::domain::errors::{BAD_ID, INVALID_PAYLOAD, INVALID_PRODUCT_IDS, NOT_FOUND};
use crate::domain::order::{CustomerDetails, OrderLineInput, OrderView, PlaceOrder, PlacedOrder};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

/// Customer fields accept any JSON scalar; numbers such as a phone number
/// are stored as text and falsy values count as not supplied.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerRequest {
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    /// Customers are matched by email; without one no customer is recorded
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub company: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub address1: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub address2: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub city: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub country: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub phone: Option<Value>,
}

impl CustomerRequest {
    /// A customer that is not an object carries no fields.
    fn from_value(value: Option<Value>) -> Self {
        value
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

impl From<CustomerRequest> for CustomerDetails {
    fn from(c: CustomerRequest) -> Self {
        Self {
            name: coerce::to_text(c.name.as_ref()),
            email: coerce::to_text(c.email.as_ref()),
            company: coerce::to_text(c.company.as_ref()),
            address1: coerce::to_text(c.address1.as_ref()),
            address2: coerce::to_text(c.address2.as_ref()),
            city: coerce::to_text(c.city.as_ref()),
            country: coerce::to_text(c.country.as_ref()),
            phone: coerce::to_text(c.phone.as_ref()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    /// Number or numeric string
    #[schema(value_type = Option<i32>)]
    pub product_id: Option<Value>,
    /// Defaults to 1 when absent, non-numeric or below 1
    #[schema(value_type = Option<i32>)]
    pub quantity: Option<Value>,
}

impl OrderItemRequest {
    /// `None` when the element is not an object or its product id does not
    /// coerce to a row id.
    fn to_line(item: Value) -> Option<OrderLineInput> {
        let item: OrderItemRequest = serde_json::from_value(item).ok()?;
        Some(OrderLineInput {
            product_id: coerce::to_record_id(item.product_id.as_ref())?,
            quantity: coerce::to_quantity(item.quantity.as_ref()),
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    #[schema(value_type = Option<CustomerRequest>)]
    pub customer: Option<Value>,
    #[schema(value_type = Option<Vec<OrderItemRequest>>)]
    pub items: Option<Value>,
}

impl CreateOrderRequest {
    fn into_command(self) -> Result<PlaceOrder, AppError> {
        let items = match self.items {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => return Err(AppError::BadRequest(INVALID_PAYLOAD.to_string())),
        };

        let lines = items
            .into_iter()
            .map(OrderItemRequest::to_line)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| AppError::BadRequest(INVALID_PRODUCT_IDS.to_string()))?;

        Ok(PlaceOrder {
            customer: CustomerRequest::from_value(self.customer).into(),
            lines,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    pub id: i32,
    pub total: f64,
    pub currency: String,
}

impl TryFrom<PlacedOrder> for CreateOrderResponse {
    type Error = AppError;

    fn try_from(o: PlacedOrder) -> Result<Self, Self::Error> {
        let total = o
            .total
            .to_f64()
            .ok_or_else(|| AppError::Internal(format!("total {} is not representable", o.total)))?;
        Ok(Self {
            id: o.id,
            total,
            currency: o.currency,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderSummaryResponse {
    pub id: i32,
    pub customer_id: Option<i32>,
    /// Name given at checkout
    pub customer_name: Option<String>,
    /// Decimal total as a string, e.g. "39.98"
    pub total: String,
    pub created_at: String,
    /// Registered customer fields, when the order has a customer
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: i32,
    pub name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub currency: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order: OrderSummaryResponse,
    pub items: Vec<OrderItemResponse>,
}

impl From<OrderView> for OrderResponse {
    fn from(o: OrderView) -> Self {
        let customer = o.customer;
        Self {
            order: OrderSummaryResponse {
                id: o.id,
                customer_id: o.customer_id,
                customer_name: o.customer_name,
                total: o.total.to_string(),
                created_at: o.created_at.to_rfc3339(),
                name: customer.as_ref().map(|c| c.name.clone()),
                email: customer.as_ref().map(|c| c.email.clone()),
                company: customer.as_ref().and_then(|c| c.company.clone()),
                city: customer.as_ref().and_then(|c| c.city.clone()),
                country: customer.and_then(|c| c.country),
            },
            items: o
                .items
                .into_iter()
                .map(|i| OrderItemResponse {
                    product_id: i.product_id,
                    name: i.product_name,
                    quantity: i.quantity,
                    unit_price: i.unit_price.to_string(),
                    currency: i.currency,
                })
                .collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Places an order. Product prices are resolved, the customer is upserted by
/// email, and the order with its items is written in one database
/// transaction: either everything is committed or nothing is.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Invalid payload, product ids or mixed currencies"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<OrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let command = body.into_inner().into_command()?;

    let placed = web::block(move || service.place_order(command)).await??;

    Ok(HttpResponse::Created().json(CreateOrderResponse::try_from(placed)?))
}

/// GET /orders/{id}
///
/// Returns the order with its customer and items.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<OrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_id = coerce::parse_record_id(&path.into_inner())
        .ok_or_else(|| AppError::BadRequest(BAD_ID.to_string()))?;

    match web::block(move || service.get_order(order_id)).await?? {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound(NOT_FOUND.to_string())),
    }
}
