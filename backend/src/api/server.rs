//! HTTP server serving the rendered portfolio.
//!
//! # API Endpoints
//!
//! | Method | Path              | Description                              |
//! |--------|-------------------|------------------------------------------|
//! | GET    | `/`               | Rendered page (`?theme=light|dark`)      |
//! | GET    | `/theme.css`      | Stylesheet (`?theme=light|dark`)         |
//! | GET    | `/api/portfolio`  | Shaped portfolio as JSON                 |
//! | POST   | `/api/reload`     | Rebuild the portfolio from the dataset   |
//! | GET    | `/api/logs`       | SSE stream for real-time logs            |
//! | GET    | `/health`         | Health check                             |
//! | GET    | `/assets/*`       | Static files (images)                    |

use axum::{
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{sse::Event, Html, IntoResponse, Json, Sse},
    routing::{get, post},
    Router,
};
use futures::stream::Stream;
use serde_json::{json, Value};
use std::{convert::Infallible, net::SocketAddr, path::Path, sync::Arc, time::Duration};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt as _;
use tower_http::{cors::CorsLayer, services::ServeDir};

use super::logs::{log_error, log_info_indent, log_success, LOG_BROADCASTER};
use super::types::{error_response, ReloadResponse, ThemeQuery};
use crate::config::AppConfig;
use crate::error::{ServerError, ServerResult};
use crate::models::Portfolio;
use crate::render::{render_page, stylesheet, RenderOptions, Theme};
use crate::store::PortfolioStore;

/// Shared state of all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PortfolioStore>,
    /// Theme used when the request does not choose one
    pub default_theme: Theme,
    pub page_title: String,
}

impl AppState {
    pub fn new(store: PortfolioStore, config: &AppConfig) -> Self {
        Self {
            store: Arc::new(store),
            default_theme: config.theme,
            page_title: config.page_title.clone(),
        }
    }
}

/// Build the router. `assets_dir` is served under `/assets` when it exists.
pub fn build_router(state: AppState, assets_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let mut app = Router::new()
        .route("/", get(page))
        .route("/theme.css", get(theme_css))
        .route("/health", get(health))
        .route("/api/portfolio", get(portfolio_json))
        .route("/api/reload", post(reload))
        .route("/api/logs", get(sse_logs));

    if let Some(dir) = assets_dir.filter(|d| d.is_dir()) {
        app = app.nest_service("/assets", ServeDir::new(dir));
    }

    app.layer(cors).with_state(state)
}

/// Load the dataset and start the HTTP server.
///
/// The dataset is loaded before binding, so a broken dataset stops startup.
pub async fn start_server(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = PortfolioStore::load(&config.data_path)?;
    let state = AppState::new(store, &config);
    let app = build_router(state, Some(&config.assets_dir));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    log_success(format!("🚀 Folio server running on http://localhost:{}", config.port));
    log_info_indent("GET  /               - Rendered portfolio (?theme=light|dark)", 1);
    log_info_indent("GET  /theme.css      - Stylesheet", 1);
    log_info_indent("GET  /api/portfolio  - Shaped portfolio (JSON)", 1);
    log_info_indent("POST /api/reload     - Reload the dataset", 1);
    log_info_indent("GET  /api/logs       - SSE log stream", 1);
    log_info_indent("GET  /health         - Health check", 1);

    axum::serve(listener, app).await?;

    Ok(())
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            ServerError::Load(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(error_response(&self.to_string()))).into_response()
    }
}

/// Rendered page
async fn page(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> ServerResult<Html<String>> {
    let theme = query.resolve(state.default_theme).map_err(ServerError::BadRequest)?;
    let portfolio = state.store.snapshot();

    let options = RenderOptions::default()
        .with_theme(theme)
        .with_page_title(state.page_title.clone())
        .with_theme_switch(true);

    Ok(Html(render_page(&portfolio, &options)))
}

/// Stylesheet for a theme
async fn theme_css(
    State(state): State<AppState>,
    Query(query): Query<ThemeQuery>,
) -> ServerResult<impl IntoResponse> {
    let theme = query.resolve(state.default_theme).map_err(ServerError::BadRequest)?;
    Ok(([(header::CONTENT_TYPE, "text/css; charset=utf-8")], stylesheet(theme)))
}

/// Shaped portfolio
async fn portfolio_json(State(state): State<AppState>) -> Json<Portfolio> {
    Json(state.store.snapshot().as_ref().clone())
}

/// Rebuild from the dataset
async fn reload(State(state): State<AppState>) -> ServerResult<Json<ReloadResponse>> {
    let store = Arc::clone(&state.store);

    let report = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| {
            log_error(format!("Reload task failed: {}", e));
            ServerError::Internal(e.to_string())
        })??;

    Ok(Json(ReloadResponse::from(report)))
}

/// Health check endpoint
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "folio",
        "version": env!("CARGO_PKG_VERSION"),
        "dataset": state.store.data_path().display().to_string(),
    }))
}

/// SSE endpoint for real-time log streaming
async fn sse_logs() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = LOG_BROADCASTER.subscribe();

    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(entry) => {
            let json = serde_json::to_string(&entry).ok()?;
            Some(Ok(Event::default().data(json)))
        }
        Err(_) => None,
    });

    Sse::new(stream).keep_alive(
        axum::response::sse::KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
