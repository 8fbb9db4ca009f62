use actix_web::{middleware::Logger, web, App, HttpServer};
use alliance_server::{config, http, metrics};
use sqlx::postgres::PgPoolOptions;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // Configuration
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let settings = config::settings();

    // Postgres pool
    let db_pool = PgPoolOptions::new()
        .max_connections(settings.pool_size)
        .connect(&database_url)
        .await
        .expect("Failed to create Postgres pool");

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(metrics::METRICS.clone())
            .app_data(web::Data::new(db_pool.clone()))
            .configure(http::routes::init_routes)
    })
    .bind(&settings.bind_addr)?
    .run()
    .await
}
