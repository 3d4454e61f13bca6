//! Route handlers for the site

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use refrank_content::results::{self, SamplePrediction};
use refrank_content::{MobileMenu, Page, ScoreBucket, NAV_ITEMS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::state::AppState;
use crate::{pages, shell};

/// Stylesheet, embedded at build time
pub const STYLE_CSS: &str = include_str!("../static/style.css");

/// htmx subset used by the shell, embedded so the site works offline
pub const HTMX_JS: &str = include_str!("../static/htmx.min.js");

// ============== Page Handlers ==============

/// Query accepted by every page: `?menu=open` renders with the mobile panel open
#[derive(Debug, Default, Deserialize)]
pub struct ShellQuery {
    pub menu: Option<String>,
}

impl ShellQuery {
    /// A query that fails to parse leaves the menu closed
    fn menu_from(query: Option<Query<ShellQuery>>) -> MobileMenu {
        query
            .map(|Query(q)| MobileMenu::from_query(q.menu.as_deref()))
            .unwrap_or_default()
    }
}

fn render_page(state: &AppState, page: Page, menu: MobileMenu) -> Result<Html<String>> {
    let content = pages::render(page)?;
    let html = shell::wrap_page(
        page.title(),
        page.name(),
        menu,
        &content,
        &state.config.htmx_src,
    )?;
    Ok(Html(html))
}

/// 404 page inside the shell; no navigation entry is highlighted
fn not_found_page(state: &AppState, path: &str) -> Result<Response> {
    tracing::debug!(%path, "unknown page");
    let content = pages::render_not_found(path)?;
    let html = shell::wrap_page(
        "Page not found",
        path,
        MobileMenu::default(),
        &content,
        &state.config.htmx_src,
    )?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

/// Home page
pub async fn home(
    State(state): State<Arc<AppState>>,
    query: Option<Query<ShellQuery>>,
) -> Result<Html<String>> {
    render_page(&state, Page::Home, ShellQuery::menu_from(query))
}

/// About, Results and Team (and `/home`)
pub async fn page_by_slug(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    query: Option<Query<ShellQuery>>,
) -> Result<Response> {
    match Page::from_slug(&slug) {
        Some(page) => {
            tracing::debug!(page = page.name(), "render page");
            Ok(render_page(&state, page, ShellQuery::menu_from(query))?.into_response())
        }
        None => not_found_page(&state, &format!("/{slug}")),
    }
}

/// Anything the router doesn't know
pub async fn fallback(State(state): State<Arc<AppState>>, uri: Uri) -> Result<Response> {
    not_found_page(&state, uri.path())
}

// ============== HTMX Partial Handlers ==============

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    pub page: Option<String>,
    /// State before the click; only `true` counts as open
    pub open: Option<String>,
}

impl MenuQuery {
    fn was_open(&self) -> bool {
        self.open.as_deref() == Some("true")
    }
}

/// Mobile menu partial, toggled from the state the client sent.
/// An unparseable query is treated as closed with no current page.
pub async fn mobile_menu(query: Option<Query<MenuQuery>>) -> Result<Html<String>> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let mut menu = MobileMenu::new(query.was_open());
    menu.toggle();
    let current = query.page.as_deref().unwrap_or("");
    Ok(Html(shell::render_mobile_menu(current, menu)?))
}

// ============== API Handlers ==============

/// Health check
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "refrank-web",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime_secs()
    }))
}

/// Navigation entries with identifier and address
pub async fn api_pages() -> impl IntoResponse {
    let pages: Vec<serde_json::Value> = NAV_ITEMS
        .iter()
        .map(|item| {
            serde_json::json!({
                "label": item.label,
                "page": item.page.name(),
                "url": item.url()
            })
        })
        .collect();
    Json(pages)
}

#[derive(Serialize)]
pub struct PredictionJson<'a> {
    #[serde(flatten)]
    pub prediction: &'a SamplePrediction,
    pub bucket: ScoreBucket,
}

/// The Results page datasets, verbatim
pub async fn api_results() -> impl IntoResponse {
    let predictions: Vec<PredictionJson<'static>> = results::SAMPLE_PREDICTIONS
        .iter()
        .map(|prediction| PredictionJson {
            prediction,
            bucket: prediction.bucket(),
        })
        .collect();

    Json(serde_json::json!({
        "metrics": results::PERFORMANCE_METRICS,
        "feature_importance": results::FEATURE_IMPORTANCE,
        "score_distribution": results::SCORE_DISTRIBUTION,
        "training_curve": results::TRAINING_CURVE,
        "radar": results::RADAR_AXES,
        "predictions": predictions,
        "summary": results::SUMMARY_STATS
    }))
}

// ============== Static Assets ==============

/// CSS stylesheet
pub async fn style_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS)
}

/// HTMX JavaScript (embedded minimal version)
pub async fn htmx_js() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/javascript")], HTMX_JS)
}
