use serde::{Deserialize, Serialize};

/// A customer record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Record identifier
    pub id: i64,

    /// Display name
    pub name: String,

    /// Country of the customer's address, when known
    pub country_id: Option<i64>,
}
