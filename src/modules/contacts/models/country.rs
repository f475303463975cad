use serde::{Deserialize, Serialize};

/// A country record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Record identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

/// A named group of countries used for geographic roll-ups ("region").
/// Membership lives on the group; a country belongs to at most one group
/// for the purposes of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryGroup {
    /// Record identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Identifiers of the member countries
    pub country_ids: Vec<i64>,
}
