//! # payctl: Back-office Control Layer for a Payments Aggregation Platform
//!
//! `payctl` is the administrative backend for a payments/recharge aggregation
//! platform. It exposes a JSON API consumed by the admin dashboard for:
//!
//! - **Commission management**: ten per-category commission catalogs
//!   (recharge, electricity, digital vouchers, datacards, gas/FASTag, CMS,
//!   challans, cable, broadband, bank transfers), each pairing an upstream
//!   provider default with an editable platform margin, plus per-user
//!   override rates layered on top.
//! - **Service permissions**: a catalog of platform services with per-user
//!   grants, edited in transactional batches.
//! - **Operational visibility**: a filterable viewer over the append-only API
//!   call log, merchant onboarding approvals, and an IP whitelist.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via SQLx) for all persistence.
//! Handlers in [`api::handlers`] validate input and delegate to repositories
//! in [`db::handlers`]; each repository owns the SQL for one entity. Write
//! batches come in two flavors, deliberately different: permission updates
//! run in a single transaction, while commission batch edits apply row by
//! row (a mid-batch failure leaves earlier rows in place, matching the
//! dashboard's established behavior).
//!
//! Authentication, session handling and IP allow-listing are enforced by
//! infrastructure in front of this service; payment providers are called by
//! the transaction pipeline, not from here. This crate is the system of
//! record for rates, grants and the log viewer only.
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use payctl::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = payctl::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     payctl::telemetry::init_telemetry()?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Database Setup
//!
//! The application requires a PostgreSQL database and automatically runs
//! migrations on startup:
//!
//! ```no_run
//! # use sqlx::PgPool;
//! # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
//! payctl::migrator().run(&pool).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! See the [`config`] module for configuration options.

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod openapi;
pub mod telemetry;
pub mod types;

#[cfg(test)]
pub mod test_utils;

use axum::{
    Router,
    http::HeaderValue,
    routing::{get, patch, post, put},
};
use bon::Builder;
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, debug, info, instrument};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::openapi::ApiDoc;

pub use types::{ApiLogId, CategoryId, CommissionCategory, CommissionId, ServiceId, UserId};

/// Application state shared across all request handlers.
///
/// # Example
///
/// ```ignore
/// let state = AppState::builder().db(pool).config(config).build();
/// ```
#[derive(Clone, Builder)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the payctl database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Create CORS layer from configuration
fn create_cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    // tower-http panics if "*" is passed to AllowOrigin::list; it must go
    // through AllowOrigin::any() instead.
    let allow_origin = if config.cors.allowed_origins.iter().any(|o| o == "*") {
        tower_http::cors::AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in &config.cors.allowed_origins {
            origins.push(origin.parse::<HeaderValue>()?);
        }
        tower_http::cors::AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(config.cors.allow_credentials)
        .allow_methods(tower_http::cors::AllowMethods::mirror_request())
        .allow_headers(tower_http::cors::AllowHeaders::mirror_request()))
}

/// Build the application router with all endpoints and middleware.
///
/// The admin API is nested under `/admin`; interactive documentation is
/// served at `/admin/docs`.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let admin_routes = Router::new()
        // Commission management
        .route("/commissions/data", get(api::handlers::commissions::get_default_commissions))
        .route("/commissions/users", get(api::handlers::commissions::list_users))
        .route(
            "/commissions/users/{user_id}/data",
            get(api::handlers::commissions::get_user_commissions),
        )
        .route(
            "/commissions/users/{user_id}",
            put(api::handlers::commissions::update_user_commissions),
        )
        // The literal /commissions/users routes take precedence over this capture
        .route("/commissions/{type}", put(api::handlers::commissions::update_commissions))
        // Service permissions
        .route("/permissions/users", get(api::handlers::permissions::list_users))
        .route("/permissions/{user_id}", get(api::handlers::permissions::get_user_permissions))
        .route("/permissions/{user_id}", post(api::handlers::permissions::update_user_permissions))
        // Operational visibility
        .route("/api-logs", get(api::handlers::api_logs::list_api_logs))
        .route("/onboard-requests", get(api::handlers::onboarding::list_onboard_requests))
        .route(
            "/onboard-requests/{id}/status",
            post(api::handlers::onboarding::update_onboard_status),
        )
        .route("/whitelisted-ips", get(api::handlers::whitelisted_ips::list_whitelisted_ips))
        .route(
            "/whitelisted-ips/{id}/toggle-status",
            patch(api::handlers::whitelisted_ips::toggle_ip_status),
        );

    let router = Router::new()
        .route("/healthz", get(|| async { "OK" }))
        .nest("/admin", admin_routes)
        .with_state(state.clone())
        .merge(Scalar::with_url("/admin/docs", ApiDoc::openapi()));

    let cors_layer = create_cors_layer(&state.config)?;

    let router = router.layer(cors_layer).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    Ok(router)
}

/// Main application struct that owns all resources and lifecycle.
///
/// 1. **Create**: [`Application::new`] connects the pool and runs migrations
/// 2. **Serve**: [`Application::serve`] binds a TCP port and handles requests
///    until the shutdown future resolves
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        debug!("Starting payctl with configuration: {:#?}", config);

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.pool.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.pool.acquire_timeout_secs))
            .connect(config.database_url())
            .await?;

        migrator().run(&pool).await?;

        let state = AppState::builder().db(pool.clone()).config(config.clone()).build();
        let router = build_router(state)?;

        Ok(Self { router, config, pool })
    }

    /// Convert application into a test server (for tests)
    #[cfg(test)]
    pub fn into_test_server(self) -> axum_test::TestServer {
        axum_test::TestServer::new(self.router.into_make_service()).expect("Failed to create test server")
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!(
            "payctl listening on http://{}, available at http://localhost:{}",
            bind_addr, self.config.port
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
