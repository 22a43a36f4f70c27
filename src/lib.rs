pub mod application;
pub mod cart;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod schema;

#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::catalog_service::CatalogService;
use application::order_service::OrderService;
use application::payment_service::PaymentService;
use infrastructure::{DieselCatalogRepository, DieselOrderRepository, DieselPaymentRepository};

pub use config::Settings;
pub use db::{create_pool, DbPool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run any pending Diesel migrations against the pool's database.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    let applied = conn.run_pending_migrations(MIGRATIONS)?;
    for version in applied {
        log::info!("Applied migration {}", version);
    }
    Ok(())
}

/// The services handlers pull out of app data.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: web::Data<CatalogService>,
    pub orders: web::Data<OrderService>,
    pub payments: web::Data<PaymentService>,
}

impl AppServices {
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            catalog: web::Data::new(CatalogService::new(DieselCatalogRepository::new(pool.clone()))),
            orders: web::Data::new(OrderService::new(DieselOrderRepository::new(pool.clone()))),
            payments: web::Data::new(PaymentService::new(DieselPaymentRepository::new(pool))),
        }
    }

    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.catalog.clone())
            .app_data(self.orders.clone())
            .app_data(self.payments.clone());
        handlers::configure(cfg);
    }
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    pool: DbPool,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let services = AppServices::from_pool(pool);
    let openapi = handlers::ApiDoc::openapi();

    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| services.configure(cfg))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
