use super::client::SearchError;
use super::model::LotSummary;
use super::session::SearchOutcome;

/// What a query edit decided about issuing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryAction {
    /// The query is empty: results were cleared and no request may go out.
    SkipRequest,
    /// The query is non-empty: the caller must dispatch a search for it.
    Dispatch,
}

/// Observable state of the search widget.
///
/// `loading` is true exactly while a request for the current query is
/// outstanding. `results` always reflects the response to the last query
/// that was not superseded; an empty query means empty results.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub loading: bool,
    pub results: Vec<LotSummary>,
    pub error: Option<String>,
}

impl SearchState {
    /// Applies one edit of the input text.
    ///
    /// Any previous error line is cleared. An empty query resets the result
    /// list immediately and asks the caller to skip the request; a non-empty
    /// query marks the widget loading and asks for a dispatch. Previous
    /// results stay visible while the new request is in flight.
    pub fn on_query_change(&mut self, text: &str) -> QueryAction {
        self.query = text.to_string();
        self.error = None;
        if text.is_empty() {
            self.results.clear();
            self.loading = false;
            QueryAction::SkipRequest
        } else {
            self.loading = true;
            QueryAction::Dispatch
        }
    }

    /// Folds the outcome of a dispatched request into the state.
    ///
    /// Superseded outcomes change nothing: a newer dispatch owns the widget
    /// by the time they arrive.
    pub fn apply(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Ready(lots) => {
                self.results = lots;
                self.loading = false;
            }
            SearchOutcome::Superseded => {}
            SearchOutcome::Failed(err) => {
                self.loading = false;
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }
}
