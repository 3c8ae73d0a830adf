//! HTTP surface of the dashboard.
//!
//! Each request carries the whole selection in its query string, so the
//! server holds no per-session state.

use crate::error::AppError;
use crate::page::render_page;
use crate::view::{ChartKind, DashboardView};
use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use bikeshare_common::DateRange;
use bikeshare_config::Config;
use bikeshare_data::Dataset;
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared, read-only state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// The rental table, loaded once at startup
    pub dataset: Dataset,
    /// Effective configuration
    pub config: Config,
}

impl AppState {
    /// Wraps the dataset and configuration for sharing across handlers.
    pub fn new(dataset: Dataset, config: Config) -> Arc<Self> {
        Arc::new(Self { dataset, config })
    }
}

/// Date-range selection as sent by the sidebar form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeQuery {
    /// First day, `YYYY-MM-DD`
    pub start: Option<String>,
    /// Last day, `YYYY-MM-DD`
    pub end: Option<String>,
}

impl RangeQuery {
    /// Resolves the selection, defaulting missing or empty values to the
    /// dataset bounds. The range is not reordered or clamped.
    pub fn resolve(&self, bounds: DateRange) -> Result<DateRange, AppError> {
        let start = parse_param("start", self.start.as_deref())?.unwrap_or(bounds.start);
        let end = parse_param("end", self.end.as_deref())?.unwrap_or(bounds.end);
        Ok(DateRange::new(start, end))
    }
}

fn parse_param(name: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("invalid {name} date '{raw}', expected YYYY-MM-DD"))),
    }
}

/// Builds the dashboard router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/charts/:kind", get(chart_image))
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn dashboard_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Html<String>, AppError> {
    let range = query.resolve(state.dataset.date_bounds())?;
    let view = DashboardView::build(&state.dataset, range);
    debug!(%range, records = view.selected_records, "Rendering dashboard page");
    Ok(Html(render_page(&view)))
}

async fn chart_image(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, AppError> {
    let kind: ChartKind = kind.parse().map_err(AppError::NotFound)?;
    let range = query.resolve(state.dataset.date_bounds())?;
    let view = DashboardView::build(&state.dataset, range);
    let png = view.render_chart(kind, &state.config.graphs)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}

/// Serves the dashboard until Ctrl-C.
pub async fn run_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.config.server.socket_addr();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
