use axum::extract::{FromRef, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use clap::Parser;
use leptos::prelude::LeptosOptions;
use thiserror::Error;

use crate::search::client::request_url;

/// Runtime configuration for the SSR binary.
///
/// The upstream is the external lot-search service. This server never
/// implements the search itself; it only forwards `/api/search/{query}` so
/// the widget in the browser can stay same-origin.
#[derive(Debug, Parser)]
pub struct ServerConfig {
    /// Base URL of the upstream lot-search API
    #[arg(
        long,
        env = "SEARCH_UPSTREAM_URL",
        default_value = "http://localhost:8080/api/search"
    )]
    pub search_upstream: String,
}

/// Shared state for the pass-through route.
#[derive(Clone)]
pub struct SearchProxy {
    http: reqwest::Client,
    upstream: String,
}

impl SearchProxy {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream: config.search_upstream.clone(),
        }
    }
}

#[derive(Clone, FromRef)]
pub struct ServerState {
    pub leptos_options: LeptosOptions,
    pub proxy: SearchProxy,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("could not reach the search upstream: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("search upstream returned HTTP {0}")]
    UpstreamStatus(StatusCode),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "search pass-through failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

/// `GET /api/search/{query}`: forwards the query to the configured upstream
/// and relays the JSON payload untouched.
pub async fn search_passthrough(
    State(proxy): State<SearchProxy>,
    Path(query): Path<String>,
) -> Result<Response, ProxyError> {
    let url = request_url(&proxy.upstream, &query);
    tracing::debug!(%url, "forwarding search request");

    let upstream = proxy.http.get(&url).send().await?;
    let status = upstream.status();
    if !status.is_success() {
        return Err(ProxyError::UpstreamStatus(status));
    }

    let body = upstream.bytes().await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_defaults_to_the_local_search_service() {
        let config = ServerConfig::parse_from(["vintry"]);
        assert_eq!(config.search_upstream, "http://localhost:8080/api/search");
    }

    #[test]
    fn upstream_flag_overrides_the_default() {
        let config = ServerConfig::parse_from([
            "vintry",
            "--search-upstream",
            "http://search.internal/api/lots",
        ]);
        assert_eq!(config.search_upstream, "http://search.internal/api/lots");
    }
}
