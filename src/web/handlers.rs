//! HTTP request handlers

use super::state::AppState;
use crate::engines::EngineDescriptor;
use crate::router::{Resolution, SearchOutcome};
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::Deserialize;
use tera::Context;

/// Query parameters accepted by `/` and `/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
}

/// Home page handler
///
/// A non-blank `q` is searched immediately; otherwise the form is shown.
pub async fn index(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    match params.q {
        Some(q) if !q.trim().is_empty() => perform_search(&state, &q).await,
        _ => render_index(&state, "").await,
    }
}

/// Search form submission handler
pub async fn search(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();
    if query.is_empty() {
        return Redirect::to("/").into_response();
    }
    perform_search(&state, query).await
}

/// Resolve the query and redirect, or fall back to the search page
async fn perform_search(state: &AppState, query: &str) -> Response {
    match state.router.route(query).await {
        SearchOutcome::Navigate(resolution) => {
            navigate(&resolution).unwrap_or_else(|| render_page(state, query, &[]))
        }
        // The catalog was just loaded for this search; don't fetch it again for hints
        SearchOutcome::Idle(_) => render_page(state, query, &[]),
    }
}

/// 303 to the resolved URL, or None when it cannot be sent as a header
fn navigate(resolution: &Resolution) -> Option<Response> {
    match HeaderValue::from_str(&resolution.url) {
        Ok(location) => Some((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response()),
        Err(e) => {
            tracing::error!(
                "Engine '{}' produced an unusable URL {:?}: {}",
                resolution.engine.name,
                resolution.url,
                e
            );
            None
        }
    }
}

async fn render_index(state: &AppState, query: &str) -> Response {
    let catalog = state.router.catalog().await;
    let shortcuts: Vec<&EngineDescriptor> = catalog.iter().filter(|e| e.has_shortcut()).collect();
    render_page(state, query, &shortcuts)
}

fn render_page(state: &AppState, query: &str, shortcuts: &[&EngineDescriptor]) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("query", query);
    ctx.insert("shortcuts", shortcuts);

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Current engine catalog as JSON
pub async fn engines(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.router.catalog().await)
}

/// OpenSearch description so browsers can add the redirector as an engine
pub async fn opensearch(State(state): State<AppState>) -> Response {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("base_url", &state.base_url());

    match state.templates.render_with_context("opensearch.xml", &ctx) {
        Ok(xml) => (
            [(header::CONTENT_TYPE, "application/opensearchdescription+xml")],
            xml,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain")],
        "User-agent: *\nDisallow: /\n",
    )
}
