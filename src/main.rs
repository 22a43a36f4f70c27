use dotenvy::dotenv;
use std::io;
use storefront::{build_server, create_pool, run_migrations, Settings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(io::Error::other)?;

    let pool = create_pool(&settings.database_url, settings.pool_size).map_err(io::Error::other)?;
    run_migrations(&pool).map_err(io::Error::other)?;

    log::info!("Starting server at http://{}:{}", settings.host, settings.port);

    build_server(pool, &settings.host, settings.port)?.await
}
