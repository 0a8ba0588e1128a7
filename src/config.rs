use leptos::prelude::*;

/// Default endpoint: the same-origin pass-through mounted by the SSR
/// server, so the browser-visible value carries no deployment detail.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "/api/search";

/// Where the search widget sends its queries.
///
/// Injected at the app root with [`provide_search_config`] and overridable
/// per widget through its `endpoint` prop. The widget itself never carries
/// a compiled-in URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Base URL queried as `GET {endpoint}/{url-encoded query}`.
    pub endpoint: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }
}

impl SearchConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

/// Makes `config` available to every widget below the current owner.
pub fn provide_search_config(config: SearchConfig) {
    provide_context(config);
}

/// The injected config, falling back to the same-origin default.
pub fn use_search_config() -> SearchConfig {
    use_context::<SearchConfig>().unwrap_or_default()
}
