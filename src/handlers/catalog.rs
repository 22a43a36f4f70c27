use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::catalog_service::CatalogService;
use crate::domain::catalog::{Category, Product, ProductFilter};
use crate::domain::coerce;
use crate::domain::errors::{BAD_ID, NOT_FOUND};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Decimal price as a string, e.g. "19.99"
    pub price: String,
    pub currency: String,
    pub image_url: Option<String>,
    /// Category name, if the product has one
    pub category: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price.to_string(),
            currency: p.currency,
            image_url: p.image_url,
            category: p.category,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Only products in this category
    pub category_id: Option<String>,
    /// Only products in the category with this name
    pub category: Option<String>,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "All categories, ordered by name", body = [CategoryResponse]),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn list_categories(service: web::Data<CatalogService>) -> Result<HttpResponse, AppError> {
    let categories = web::block(move || service.list_categories()).await??;
    let body: Vec<CategoryResponse> = categories.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /products
///
/// Lists products ordered by id. `category_id` takes precedence over
/// `category` when both are given.
#[utoipa::path(
    get,
    path = "/products",
    params(ProductQuery),
    responses(
        (status = 200, description = "Products", body = [ProductResponse]),
        (status = 400, description = "Non-numeric category_id"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn list_products(
    service: web::Data<CatalogService>,
    query: web::Query<ProductQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let filter = ProductFilter::from_query(query.category_id.as_deref(), query.category.as_deref())?;

    let products = web::block(move || service.list_products(&filter)).await??;
    let body: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 400, description = "Non-numeric id"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "catalog"
)]
pub async fn get_product(
    service: web::Data<CatalogService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = coerce::parse_record_id(&path.into_inner())
        .ok_or_else(|| AppError::BadRequest(BAD_ID.to_string()))?;

    match web::block(move || service.get_product(id)).await?? {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::NotFound(NOT_FOUND.to_string())),
    }
}
