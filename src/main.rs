//! Options Tool API Server
//!
//! REST API server for tracking option contracts.

use anyhow::Context;
use options_tool_api::api::{cors_layer, create_router};
use options_tool_api::config::Config;
use options_tool_api::db::DatabasePool;
use options_tool_api::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use options_tool_api::models::{
    ApiInfoResponse, EndpointMap, HealthResponse, OptionContract, OptionRequest,
    ReadinessResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        options_tool_api::api::handlers::api_info,
        options_tool_api::api::handlers::health_check,
        options_tool_api::api::handlers::readiness_check,
        options_tool_api::api::handlers::list_options,
        options_tool_api::api::handlers::get_option,
        options_tool_api::api::handlers::list_options_by_symbol,
        options_tool_api::api::handlers::list_options_by_type,
        options_tool_api::api::handlers::create_option,
        options_tool_api::api::handlers::update_option,
        options_tool_api::api::handlers::delete_option,
    ),
    components(
        schemas(
            ApiInfoResponse,
            EndpointMap,
            HealthResponse,
            ReadinessResponse,
            OptionContract,
            OptionRequest,
        )
    ),
    tags(
        (name = "Health", description = "Info, liveness and readiness endpoints"),
        (name = "Options", description = "Option contract management"),
    ),
    info(
        title = "Options Tool API",
        version = "1.0.0",
        description = "REST API for tracking option contracts",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;

    // Create application state
    let state = match config.database.url.as_deref() {
        Some(url) => {
            let db = DatabasePool::new(url, &config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                db.run_migrations()
                    .await
                    .context("failed to run database migrations")?;
            }
            Arc::new(AppState::with_database(db))
        }
        None => {
            warn!("No database configured, option contracts are kept in memory");
            Arc::new(AppState::new())
        }
    };

    let host = &config.server.host;
    let port = config.server.port;

    info!("Starting Options Tool API on {}:{}", host, port);
    info!(
        "Swagger UI available at http://{}:{}/swagger-ui/",
        host, port
    );

    // Configure CORS
    let cors = cors_layer(&config.cors)?;

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
