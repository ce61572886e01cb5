use serde::{Deserialize, Serialize};

/// One independently bookable apartment. Read-only reference data owned by
/// the external store; immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalUnit {
    pub id: String,
    pub name: String,
    /// Bed capacity, always at least 1 in well-formed data.
    pub capacity: u32,
    #[serde(default)]
    pub cleaning_fee: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}
