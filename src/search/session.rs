use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use super::client::{Cancellable, InFlightSearch, SearchClient, SearchError};
use super::model::LotSummary;

/// How a dispatched request resolved, as seen by the widget.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Response to the newest request: publish it.
    Ready(Vec<LotSummary>),
    /// Cancelled or overtaken by a newer request: leave state untouched.
    Superseded,
    /// The newest request failed for a non-cancellation reason.
    Failed(SearchError),
}

struct ActiveRequest {
    generation: u64,
    canceller: Box<dyn Cancellable>,
}

struct SessionInner {
    client: Rc<dyn SearchClient>,
    generation: Cell<u64>,
    active: RefCell<Option<ActiveRequest>>,
}

/// Coordinates the request lifecycle for one search widget.
///
/// Two rules, enforced together:
/// - at most one request is in flight: `dispatch` cancels the previous
///   handle synchronously, before the client is called and before the
///   returned future is first polled;
/// - only the newest request may publish: every dispatch is stamped with a
///   generation, and a completion whose stamp is no longer current resolves
///   to [`SearchOutcome::Superseded`] no matter what the transport
///   delivered.
///
/// The session is single-threaded. The widget drives it from the UI event
/// loop, so plain `Cell`/`RefCell` are enough and the type is deliberately
/// not `Send`.
#[derive(Clone)]
pub struct SearchSession {
    inner: Rc<SessionInner>,
}

impl SearchSession {
    pub fn new(client: Rc<dyn SearchClient>) -> Self {
        Self {
            inner: Rc::new(SessionInner {
                client,
                generation: Cell::new(0),
                active: RefCell::new(None),
            }),
        }
    }

    /// Cancels the outstanding request, if any, and invalidates every
    /// completion still on its way in. Used when the query is cleared and
    /// when the widget unmounts.
    pub fn cancel_inflight(&self) {
        // Bump first: a response that already left the transport must find
        // its generation stale even if the abort lands too late.
        self.inner.generation.set(self.inner.generation.get() + 1);
        if let Some(request) = self.inner.active.borrow_mut().take() {
            request.canceller.cancel();
        }
    }

    /// True while a request is outstanding.
    pub fn has_inflight(&self) -> bool {
        self.inner.active.borrow().is_some()
    }

    /// Cancels any outstanding request and issues a new search for `query`.
    ///
    /// Everything up to and including the client call happens before this
    /// function returns; only awaiting the response is deferred to the
    /// returned future.
    pub fn dispatch(&self, query: &str) -> LocalBoxFuture<'static, SearchOutcome> {
        self.cancel_inflight();
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);

        tracing::debug!(%query, generation, "issuing search request");
        let InFlightSearch {
            response,
            canceller,
        } = self.inner.client.search(query);
        *self.inner.active.borrow_mut() = Some(ActiveRequest {
            generation,
            canceller,
        });

        let inner = Rc::clone(&self.inner);
        async move {
            let result = response.await;

            // A newer dispatch may have taken over while we were suspended;
            // the active handle then belongs to it, not to us.
            if inner.generation.get() != generation {
                return SearchOutcome::Superseded;
            }
            inner
                .active
                .borrow_mut()
                .take_if(|active| active.generation == generation);

            match result {
                Ok(lots) => SearchOutcome::Ready(lots),
                Err(SearchError::Cancelled) => SearchOutcome::Superseded,
                Err(err) => {
                    tracing::warn!(%err, "search request failed");
                    SearchOutcome::Failed(err)
                }
            }
        }
        .boxed_local()
    }
}
