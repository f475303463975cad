use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line of a sale order, pointing at the product sold
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleOrderLine {
    /// Record identifier
    pub id: i64,

    /// Order this line belongs to
    pub order_id: i64,

    /// Product sold on this line
    pub product_id: i64,

    /// Ordered quantity in the product's unit of measure
    pub quantity: Decimal,

    /// Line total including taxes
    pub price_total: Decimal,
}
