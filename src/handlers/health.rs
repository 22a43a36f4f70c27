use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::application::catalog_service::CatalogService;

/// GET /health
///
/// Reports whether the database answers a trivial query.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 500, description = "Database unreachable"),
    ),
    tag = "health"
)]
pub async fn health(service: web::Data<CatalogService>) -> HttpResponse {
    match web::block(move || service.ping()).await {
        Ok(Ok(())) => HttpResponse::Ok().json(json!({ "status": "ok" })),
        Ok(Err(e)) => {
            log::warn!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "status": "error" }))
        }
        Err(e) => {
            log::warn!("Health check could not run: {}", e);
            HttpResponse::InternalServerError().json(json!({ "status": "error" }))
        }
    }
}
