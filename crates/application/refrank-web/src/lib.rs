//! RefRank project site
//!
//! Server-rendered HTML for the four content pages, with HTMX for the
//! mobile menu.
//!
//! ## Layout
//!
//! - **Shell**: top navigation, mobile menu and footer, shared by every page
//! - **Pages**: one askama template per page, wrapped by the shell
//! - **Charts**: inline SVG built on the server, no client charting library
//! - **API**: the same datasets as JSON

pub mod charts;
pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::WebConfig;
pub use error::{Result, WebError};
pub use state::AppState;

/// Create the main router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Pages
        .route("/", get(handlers::home))
        .route("/:slug", get(handlers::page_by_slug))
        // HTMX partials
        .route("/htmx/menu", get(handlers::mobile_menu))
        // API endpoints
        .route("/api/health", get(handlers::health))
        .route("/api/pages", get(handlers::api_pages))
        .route("/api/results", get(handlers::api_results))
        // Static assets
        .route("/static/style.css", get(handlers::style_css))
        .route("/static/htmx.min.js", get(handlers::htmx_js))
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server
pub async fn serve(state: Arc<AppState>, addr: &str) -> Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("RefRank site listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn app() -> Router {
        create_router(Arc::new(AppState::default()))
    }

    async fn get_body(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn active_nav(html: &str) -> Vec<&str> {
        html.split("class=\"nav-link active\"")
            .skip(1)
            .filter_map(|rest| rest.split('>').nth(1))
            .filter_map(|rest| rest.split('<').next())
            .collect()
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, html) = get_body("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<title>RefRank | Academic Reference Quality Scoring</title>"));
        assert_eq!(active_nav(&html), vec!["Home"]);
    }

    #[tokio::test]
    async fn test_each_page_highlights_itself() {
        for (uri, label) in [
            ("/about", "About"),
            ("/results", "Results"),
            ("/team", "Team"),
            ("/home", "Home"),
            ("/About", "About"),
        ] {
            let (status, html) = get_body(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(active_nav(&html), vec![label], "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_page_is_404_inside_shell() {
        for uri in ["/nope", "/contact", "/api/nope", "/about/extra"] {
            let (status, html) = get_body(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert!(html.contains("class=\"topbar\""), "{uri}");
            assert!(active_nav(&html).is_empty(), "{uri}");
            assert!(!html.contains("nav-link active"), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_menu_query_opens_panel() {
        let (_, closed) = get_body("/team").await;
        assert!(!closed.contains("class=\"mobile-panel\""));

        let (status, open) = get_body("/team?menu=open").await;
        assert_eq!(status, StatusCode::OK);
        assert!(open.contains("class=\"mobile-panel\""));
        assert!(open.contains("aria-expanded=\"true\""));
    }

    #[tokio::test]
    async fn test_htmx_menu_toggles() {
        let (status, html) = get_body("/htmx/menu?page=Team&open=false").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("class=\"mobile-panel\""));
        assert!(html.contains("open=true"));
        assert!(!html.contains("<html"));

        let (_, html) = get_body("/htmx/menu?page=Team&open=true").await;
        assert!(!html.contains("class=\"mobile-panel\""));
        assert!(html.contains("open=false"));
    }

    #[tokio::test]
    async fn test_malformed_page_query_renders_closed_menu() {
        for (uri, label) in [
            ("/about?menu=open&menu=open", "About"),
            ("/?menu=open&menu=x", "Home"),
        ] {
            let (status, html) = get_body(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(active_nav(&html), vec![label], "{uri}");
            assert!(!html.contains("class=\"mobile-panel\""), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_malformed_menu_query_counts_as_closed() {
        let (status, html) = get_body("/htmx/menu?page=Team&open=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"mobile-menu\""));
        assert!(html.contains("class=\"mobile-panel\""));
        assert!(html.contains("page=Team&amp;open=true"));

        let (status, html) = get_body("/htmx/menu?open=yes").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("class=\"mobile-panel\""));
        assert!(html.contains("page=&amp;open=true"));

        let (status, html) = get_body("/htmx/menu?page=Team&page=About").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("page=&amp;open=true"));
    }

    #[tokio::test]
    async fn test_htmx_menu_panel_links_close_menu() {
        let (_, html) = get_body("/htmx/menu?page=About&open=false").await;
        assert_eq!(html.matches("class=\"mobile-link").count(), 4);
        assert!(!html.contains("href=\"/about?menu=open\""));
        assert!(html.contains("href=\"/about\""));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_body("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "refrank-web");
        assert!(json["uptime_secs"].as_i64().unwrap() >= 0);
    }

    #[tokio::test]
    async fn test_api_pages() {
        let (_, body) = get_body("/api/pages").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let urls: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["url"].as_str().unwrap())
            .collect();
        assert_eq!(urls, vec!["/", "/about", "/results", "/team"]);
        assert_eq!(json[3]["page"], "Team");
    }

    #[tokio::test]
    async fn test_api_results() {
        let (status, body) = get_body("/api/results").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        let buckets: Vec<&str> = json["predictions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["bucket"].as_str().unwrap())
            .collect();
        assert_eq!(buckets, vec!["excellent", "good", "excellent", "fair"]);
        assert_eq!(json["predictions"][0]["publisher"], "IEEE");
        assert_eq!(json["metrics"][0]["value"], 87.3);
        assert_eq!(json["training_curve"].as_array().unwrap().len(), 10);
        assert_eq!(json["radar"][1]["metric"], "Speed");
    }

    #[tokio::test]
    async fn test_every_listed_static_route_answers() {
        for (_, path, _) in routes::ROUTES {
            if path.contains(':') || *path == "*" {
                continue;
            }
            let (status, _) = get_body(path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
        }
    }

    #[tokio::test]
    async fn test_embedded_htmx() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/static/htmx.min.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/javascript");

        let (_, html) = get_body("/").await;
        assert!(html.contains("<script src=\"/static/htmx.min.js\"></script>"));
    }

    #[tokio::test]
    async fn test_stylesheet() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/static/style.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");
    }
}
