use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crewcall_api::config::ServerConfig;
use crewcall_api::notifications::NotificationRelay;
use crewcall_api::router::build_app_router;
use crewcall_api::state::AppState;
use crewcall_beam::{BeamClient, SyndicationGateway};
use crewcall_events::{EventBus, EventPersistence};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crewcall_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = crewcall_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    crewcall_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    crewcall_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());

    // Spawn event persistence (writes all events to the database).
    let _persistence_handle = tokio::spawn(EventPersistence::run(
        pool.clone(),
        event_bus.subscribe(),
    ));

    // Spawn the notification relay (chat webhook + push gateway).
    let relay = NotificationRelay::new(
        config.chat_webhook_url.clone(),
        config.push_gateway_url.clone(),
    );
    let _relay_handle = tokio::spawn(relay.run(event_bus.subscribe()));

    tracing::info!("Event services started (persistence, notification relay)");

    // --- BEAM syndication gateway ---
    let beam = Arc::new(SyndicationGateway::new(BeamClient::new(
        config.beam_base_url.clone(),
    )));
    tracing::info!(beam_base_url = %config.beam_base_url, "Syndication gateway ready");

    // --- App state ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::clone(&event_bus),
        beam,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Invalid HOST/PORT combination");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "Crewcall API listening");

    axum::serve(listener, app)
        .await
        .expect("Server exited with error");
}
