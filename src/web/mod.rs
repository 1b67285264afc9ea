//! Web router for the screenshot toolkit.
//!
//! Maps the three view routes onto the render layer, for a browser (or the
//! screenshot capture tooling driving one) pointed at a locally served
//! project:
//!
//! - `GET /` - Overview grid; query params `language`, `scale`, `colorScheme`
//! - `GET /config` - Raw configuration dump (renderer references excluded)
//! - `GET /screens/{deviceKey}/{screenKey}/{language}` - One screen at full
//!   device size
//! - `GET /health` - Health check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::constants::APP_NAME;
use crate::models::{ColorScheme, ProjectConfig};
use crate::render::{html_page, render_overview, render_screen, DisplayState};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web router.
#[derive(Clone)]
pub struct AppState {
    /// Project configuration (immutable after construction)
    config: Arc<ProjectConfig>,
}

impl AppState {
    /// Creates a new application state, validating the configuration's
    /// structural invariants up front.
    pub fn new(config: ProjectConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Returns the served project configuration.
    #[must_use]
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Query parameters recognized by the overview route.
#[derive(Debug, Default, Deserialize)]
pub struct OverviewQuery {
    /// Active language code; defaults to the first configured language.
    pub language: Option<String>,
    /// Thumbnail scale as a string-encoded float; defaults to "0.25".
    pub scale: Option<String>,
    /// "light", "dark", or empty; empty falls back to the OS preference.
    #[serde(rename = "colorScheme")]
    pub color_scheme: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET / - Overview grid with display state from the query string.
async fn overview(
    State(state): State<AppState>,
    Query(query): Query<OverviewQuery>,
) -> Html<String> {
    let display = DisplayState::resolve(
        &state.config,
        query.language.as_deref(),
        query.scale.as_deref(),
        query.color_scheme.as_deref(),
    );

    let body = render_overview(&state.config, &display);
    Html(html_page(APP_NAME, display.color_scheme, &body))
}

/// GET /config - Raw configuration dump, renderer references excluded.
async fn config_dump(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ApiError>)> {
    let json = state.config.to_pretty_json().map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiError::new(format!("Failed to serialize config: {e}"))),
        )
    })?;

    let body = format!(
        "<pre id=\"screegen-config\" data-testid=\"screegen-config\">{}</pre>",
        crate::render::escape_html(&json)
    );
    Ok(Html(html_page(APP_NAME, ColorScheme::default(), &body)))
}

/// GET /screens/{deviceKey}/{screenKey}/{language} - One full-size screen.
///
/// Lookup misses render an empty page body rather than an error.
async fn screen_view(
    State(state): State<AppState>,
    Path((device_key, screen_key, language)): Path<(String, String, String)>,
) -> Html<String> {
    let body = render_screen(&state.config, &device_key, &screen_key, &language)
        .unwrap_or_default();
    Html(html_page(APP_NAME, ColorScheme::default(), &body))
}

/// GET /screens[/..] with missing segments - literal inline error text.
async fn invalid_screen_params() -> Html<String> {
    Html(html_page(
        APP_NAME,
        ColorScheme::default(),
        "<div>Invalid screen parameters</div>",
    ))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all view routes.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server runs locally next to the capture tooling.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Overview
        .route("/", get(overview))
        // Config inspection
        .route("/config", get(config_dump))
        // Direct screen view; truncated paths surface the literal error text
        .route("/screens", get(invalid_screen_params))
        .route("/screens/{device_key}", get(invalid_screen_params))
        .route(
            "/screens/{device_key}/{screen_key}",
            get(invalid_screen_params),
        )
        .route(
            "/screens/{device_key}/{screen_key}/{language}",
            get(screen_view),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until shutdown.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails to
/// bind.
pub async fn run_server(config: ProjectConfig, addr: SocketAddr) -> anyhow::Result<()> {
    init_tracing();

    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {} server on {}", APP_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes tracing for the serving process, honoring `RUST_LOG`.
///
/// A subscriber may already be installed by the embedding application;
/// that installation wins.
fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
