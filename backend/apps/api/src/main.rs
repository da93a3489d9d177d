//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, AuthGateState, PgUserRepository, require_auth};
use axum::{
    Router, http,
    http::{Method, header},
    middleware,
};
use claims::{
    PgClaimsStore, claims_router, feedback_router, repair_centres_protected_router,
    repair_centres_public_router,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,claims=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Startup cleanup: drop expired password-reset tokens
    // Errors here should not prevent server startup
    let user_repo_for_cleanup = PgUserRepository::new(pool.clone());
    match user_repo_for_cleanup.cleanup_expired_resets().await {
        Ok(deleted) => {
            tracing::info!(resets_deleted = deleted, "Reset token cleanup completed");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Reset token cleanup failed, continuing anyway");
        }
    }

    // Auth configuration
    let auth_config = match env::var("JWT_SECRET") {
        Ok(secret) => {
            let mut config = AuthConfig {
                token_secret: secret.into_bytes(),
                ..AuthConfig::default()
            };
            if let Some(ttl) = env::var("JWT_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
            {
                config.token_ttl = Duration::from_secs(ttl);
            }
            config
        }
        Err(_) if cfg!(debug_assertions) => AuthConfig::development(),
        Err(_) => panic!("JWT_SECRET must be set in production"),
    };

    let user_repo = PgUserRepository::new(pool.clone());
    let claims_store = PgClaimsStore::new(pool.clone());

    // Auth gate shared by every protected router
    let gate = AuthGateState {
        repo: Arc::new(user_repo.clone()),
        config: Arc::new(auth_config.clone()),
    };
    let auth_gate = middleware::from_fn(move |req, next| {
        let gate = gate.clone();
        require_auth(gate, req, next)
    });

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router. Repair centre lookup stays public; everything else
    // behind the claims, feedback and users prefixes needs a token.
    let repair_centres = repair_centres_public_router(claims_store.clone()).merge(
        repair_centres_protected_router(claims_store.clone()).layer(auth_gate.clone()),
    );

    let app = Router::new()
        .nest(
            "/auth",
            auth::auth_router(user_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/users",
            auth::users_router(user_repo.clone(), auth_config.clone()),
        )
        .nest(
            "/claims",
            claims_router(claims_store.clone()).layer(auth_gate.clone()),
        )
        .nest(
            "/feedback",
            feedback_router(claims_store.clone()).layer(auth_gate.clone()),
        )
        .nest("/repair-centres", repair_centres)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
