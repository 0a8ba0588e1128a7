use serde::{Deserialize, Serialize};

/// One wine lot as returned by the search API.
///
/// The wire format is a JSON array of these objects with camelCase keys
/// (`lotCode`, `description`, `volume`, `tankCode`). Results are displayed
/// in the order the server sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotSummary {
    /// Unique lot identifier. Doubles as the list key and as the
    /// `/detail/{lot_code}` route parameter.
    pub lot_code: String,
    pub description: String,
    /// Lot volume in litres.
    pub volume: f64,
    /// Tank currently holding the lot.
    pub tank_code: String,
}
