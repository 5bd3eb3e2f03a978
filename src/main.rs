mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    startup::{self, shutdown_signal},
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router::app(AppState::new(db.clone())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Database pool closed");

    Ok(())
}
