use futures::future::LocalBoxFuture;
use futures::FutureExt;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use super::model::LotSummary;

/// Cancellation handle for one in-flight search request.
///
/// The widget only ever sees this trait, never the transport's own token
/// type. Cancelling must be idempotent and harmless after the request has
/// already settled.
pub trait Cancellable {
    fn cancel(&self);
}

/// Ways a search request can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// The request was cancelled on purpose. Callers translate this into a
    /// silent outcome rather than an error surface.
    #[error("request cancelled")]
    Cancelled,
    #[error("search endpoint returned HTTP {status}")]
    Http { status: u16 },
    #[error("could not reach the search endpoint: {0}")]
    Transport(String),
    #[error("malformed search response: {0}")]
    Decode(String),
}

/// A dispatched request: the pending response plus the handle that cancels
/// it. The response future resolves with [`SearchError::Cancelled`] when
/// the handle fires first.
pub struct InFlightSearch {
    pub response: LocalBoxFuture<'static, Result<Vec<LotSummary>, SearchError>>,
    pub canceller: Box<dyn Cancellable>,
}

/// The data-fetching collaborator the search widget depends on. Production
/// code hands the widget a [`FetchSearchClient`]; tests script their own.
pub trait SearchClient {
    fn search(&self, query: &str) -> InFlightSearch;
}

/// Builds the request URL `{endpoint}/{url-encoded query}`.
pub fn request_url(endpoint: &str, query: &str) -> String {
    format!(
        "{}/{}",
        endpoint.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

fn decode_results(body: &str) -> Result<Vec<LotSummary>, SearchError> {
    serde_json::from_str(body).map_err(|err| SearchError::Decode(err.to_string()))
}

/// [`SearchClient`] over the browser's `fetch`, with an `AbortController`
/// backing the cancellation handle. Aborting stops the transfer and settles
/// the response future with [`SearchError::Cancelled`].
pub struct FetchSearchClient {
    endpoint: String,
}

impl FetchSearchClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl SearchClient for FetchSearchClient {
    fn search(&self, query: &str) -> InFlightSearch {
        let url = request_url(&self.endpoint, query);
        // AbortController::new only fails outside a browser realm; without
        // one the request simply runs uncancellable to completion.
        let controller = web_sys::AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());

        InFlightSearch {
            response: fetch_lots(url, signal).boxed_local(),
            canceller: Box::new(AbortOnCancel { controller }),
        }
    }
}

struct AbortOnCancel {
    controller: Option<web_sys::AbortController>,
}

impl Cancellable for AbortOnCancel {
    fn cancel(&self) {
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

async fn fetch_lots(
    url: String,
    signal: Option<web_sys::AbortSignal>,
) -> Result<Vec<LotSummary>, SearchError> {
    use wasm_bindgen_futures::JsFuture;

    let window =
        web_sys::window().ok_or_else(|| SearchError::Transport("no window object".to_string()))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_signal(signal.as_ref());

    let request = web_sys::Request::new_with_str_and_init(&url, &opts)
        .map_err(|err| SearchError::Transport(js_error_text(&err)))?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| classify_fetch_error(&err))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| SearchError::Transport("fetch returned a non-Response value".to_string()))?;

    if !response.ok() {
        return Err(SearchError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .map_err(|err| SearchError::Transport(js_error_text(&err)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|err| classify_fetch_error(&err))?;

    decode_results(&body.as_string().unwrap_or_default())
}

/// Distinguishes a deliberate abort from a genuine transport failure.
fn classify_fetch_error(err: &JsValue) -> SearchError {
    let aborted = err
        .dyn_ref::<web_sys::DomException>()
        .is_some_and(|ex| ex.name() == "AbortError");
    if aborted {
        SearchError::Cancelled
    } else {
        SearchError::Transport(js_error_text(err))
    }
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
