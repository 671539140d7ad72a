//! Products server: reads settings from env, authenticates the database, serves the API.
//!
//! Run from repo root: `cargo run -p products-server`

use products_api::{app, db, telemetry, AppState, PgProductStore, Settings};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let settings = Settings::from_env()?;
    let pool = db::pool(&settings)?;
    // Failure is logged inside; requests then fail at the persistence layer.
    db::connect(&pool).await;

    let state = AppState {
        products: Arc::new(PgProductStore::new(pool)),
    };
    let router = app(state, &settings);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("REST API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
