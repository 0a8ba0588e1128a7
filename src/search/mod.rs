pub mod client;
pub mod model;
pub mod session;
pub mod state;

pub use client::{Cancellable, FetchSearchClient, InFlightSearch, SearchClient, SearchError};
pub use model::LotSummary;
pub use session::{SearchOutcome, SearchSession};
pub use state::{QueryAction, SearchState};
