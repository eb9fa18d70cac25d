use std::net::SocketAddr;

use innkeep_api::{app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "innkeep_api=debug,innkeep_store=debug,tower_http=debug,axum::rejection=trace"
                        .into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = innkeep_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Innkeep API on port {}", config.server.port);

    let db = innkeep_store::DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to database");

    // Schema and demo inventory are set up once, before any request runs.
    db.migrate().await.expect("Failed to run migrations");
    innkeep_store::seed::seed(&db.pool)
        .await
        .expect("Failed to seed database");

    let app = app(AppState::new(&db));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
