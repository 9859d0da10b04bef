use std::sync::Arc;

use auth::AccessTokenCodec;
use chirpy::config::Config;
use chirpy::domain::chirp::service::ChirpService;
use chirpy::domain::session::service::SessionService;
use chirpy::domain::user::service::UserService;
use chirpy::inbound::http::router::create_router;
use chirpy::inbound::http::router::AppState;
use chirpy::outbound::repositories::PostgresChirpRepository;
use chirpy::outbound::repositories::PostgresRefreshTokenRepository;
use chirpy::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "chirpy",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        platform = %config.platform,
        access_token_ttl_seconds = config.auth.access_token_ttl_seconds,
        refresh_token_ttl_days = config.auth.refresh_token_ttl_days,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));
    let chirp_repository = Arc::new(PostgresChirpRepository::new(pg_pool));

    let codec = Arc::new(AccessTokenCodec::new(config.auth.jwt_secret.as_bytes()));

    let state = AppState {
        user_service: Arc::new(UserService::new(Arc::clone(&user_repository))),
        session_service: Arc::new(SessionService::new(
            user_repository,
            refresh_token_repository,
            codec,
            config.auth.access_token_ttl(),
            config.auth.refresh_token_ttl(),
        )),
        chirp_service: Arc::new(ChirpService::new(chirp_repository)),
        api_key: config.auth.api_key.clone(),
        platform: config.platform.clone(),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
