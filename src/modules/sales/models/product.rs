use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Record identifier
    pub id: i64,

    /// Display name
    pub name: String,
}

/// One row of the per-product sales aggregation: order lines joined to
/// their product, grouped by product, quantities and line totals summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    /// Product identifier
    pub product_id: i64,

    /// Product display name
    pub product_name: String,

    /// Summed quantity across the matched order lines
    pub total_quantity: Decimal,

    /// Summed line totals across the matched order lines
    pub total_value: Decimal,
}
