pub mod catalog;
pub mod health;
pub mod orders;
pub mod payments;

use actix_web::web;
use utoipa::OpenApi;

use crate::domain::errors::INVALID_PAYLOAD;
use crate::errors::AppError;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        catalog::list_categories,
        catalog::list_products,
        catalog::get_product,
        orders::create_order,
        orders::get_order,
        payments::create_payment,
    ),
    components(schemas(
        catalog::CategoryResponse,
        catalog::ProductResponse,
        orders::CustomerRequest,
        orders::OrderItemRequest,
        orders::CreateOrderRequest,
        orders::CreateOrderResponse,
        orders::OrderSummaryResponse,
        orders::OrderItemResponse,
        orders::OrderResponse,
        payments::CreatePaymentRequest,
        payments::CreatePaymentResponse,
    )),
    tags(
        (name = "catalog", description = "Read-only product catalog"),
        (name = "orders", description = "Checkout and order lookup"),
        (name = "payments", description = "Payment recording"),
        (name = "health", description = "Liveness of the API and its database"),
    )
)]
pub struct ApiDoc;

/// Register every route plus the JSON extractor config. Services are expected
/// to be registered as app data by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        AppError::BadRequest(INVALID_PAYLOAD.to_string()).into()
    }))
    .route("/health", web::get().to(health::health))
    .route("/categories", web::get().to(catalog::list_categories))
    .service(
        web::scope("/products")
            .route("", web::get().to(catalog::list_products))
            .route("/{id}", web::get().to(catalog::get_product)),
    )
    .service(
        web::scope("/orders")
            .route("", web::post().to(orders::create_order))
            .route("/{id}", web::get().to(orders::get_order)),
    )
    .route("/payments", web::post().to(payments::create_payment));
}
