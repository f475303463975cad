use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::Result;

/// A product entry of the top-products leaderboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProduct {
    /// Product identifier
    pub product_id: i64,

    /// Product display name
    pub product_name: String,

    /// Summed sale value across active orders
    pub total_value: Decimal,
}

/// A customer entry of the top-customers leaderboard, with the customer's
/// country denormalized for the country/region roll-ups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCustomer {
    /// Customer identifier
    pub customer_id: i64,

    /// Customer display name
    pub customer_name: String,

    /// Summed order totals across active orders
    pub total_value: Decimal,

    /// Country identifier, when the customer has one
    pub country_id: Option<i64>,

    /// Country display name, empty when the customer has none
    pub country_name: String,
}

/// Sale value of the top customers grouped by country
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryAggregate {
    /// Country display name as carried by the customers grouped here
    pub country: String,

    /// Summed value of the top customers in this country
    pub total_value: Decimal,

    /// Region the country resolves to, "Unknown" when none matches
    pub region: String,
}

/// Sale value of the country aggregates rolled up by region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionAggregate {
    /// Region display name
    pub region_name: String,

    /// Summed value of the country aggregates in this region
    pub total_value: Decimal,
}

/// Order and invoice counters with formatted monetary totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCounters {
    /// All orders, any state
    pub total_orders: u64,

    /// Orders in state confirmed or done
    pub sale_orders: u64,

    /// Orders awaiting invoicing, any state
    pub to_invoice: u64,

    /// Fully invoiced orders, any state
    pub invoiced: u64,

    /// The requesting user's orders, any state
    pub my_total_orders: u64,

    /// The requesting user's orders in state confirmed or done
    pub my_sale_orders: u64,

    /// The requesting user's orders awaiting invoicing
    pub my_to_invoice: u64,

    /// The requesting user's fully invoiced orders
    pub my_invoiced: u64,

    /// Sum of order totals over confirmed/done orders
    pub total_sale_amount: Decimal,

    /// Sum of order totals over invoiced orders
    pub total_invoice_amount: Decimal,

    /// Invoiced total minus the partial-payment residual
    pub total_paid_amount: Decimal,

    /// Partial-payment residual still outstanding
    pub balance_amount: Decimal,

    /// `total_sale_amount` in the company currency's display format
    pub total_sale_display: String,

    /// `total_invoice_amount` in the company currency's display format
    pub total_invoice_display: String,

    /// `total_paid_amount` in the company currency's display format
    pub total_paid_display: String,

    /// `balance_amount` in the company currency's display format
    pub balance_display: String,
}

/// The fully-populated dashboard result returned to the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesDashboard {
    /// Top products by summed sale value, at most five
    pub top_products_by_value: Vec<RankedProduct>,

    /// Top customers by summed sale value, at most five
    pub top_customers_by_value: Vec<RankedCustomer>,

    /// Top customers' value grouped by country
    pub top_countries_by_value: Vec<CountryAggregate>,

    /// Country values rolled up by region
    pub top_regions_by_value: Vec<RegionAggregate>,

    /// Order and invoice counters
    pub counters: DashboardCounters,
}

impl SalesDashboard {
    /// Check whether the dashboard carries no ranked entries at all
    pub fn is_empty(&self) -> bool {
        self.top_products_by_value.is_empty()
            && self.top_customers_by_value.is_empty()
            && self.top_countries_by_value.is_empty()
            && self.top_regions_by_value.is_empty()
    }

    /// Serialize into the JSON payload handed to the view layer
    pub fn to_payload(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}
