// A sale order as exposed by the host platform's persistence layer.
//
// Orders are read-only inputs here: the dashboard never mutates them, it
// only filters, counts and sums over a request-scoped snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sale order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    /// Quotation, not yet confirmed
    Draft,

    /// Confirmed sale order
    Confirmed,

    /// Locked/completed sale order
    Done,

    /// Cancelled order
    Cancelled,
}

impl OrderState {
    /// Whether orders in this state count as active sales
    pub fn is_active_sale(&self) -> bool {
        matches!(self, OrderState::Confirmed | OrderState::Done)
    }
}

impl Default for OrderState {
    fn default() -> Self {
        OrderState::Draft
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderState::Draft => write!(f, "draft"),
            OrderState::Confirmed => write!(f, "confirmed"),
            OrderState::Done => write!(f, "done"),
            OrderState::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(OrderState::Draft),
            "confirmed" => Ok(OrderState::Confirmed),
            "done" => Ok(OrderState::Done),
            "cancelled" => Ok(OrderState::Cancelled),
            _ => Err(format!("Invalid order state: {}", s)),
        }
    }
}

/// Invoicing status of a sale order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Nothing to invoice on this order
    NotToInvoice,

    /// Delivered or confirmed quantities awaiting an invoice
    ToInvoice,

    /// Fully invoiced
    Invoiced,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::NotToInvoice
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::NotToInvoice => write!(f, "not_to_invoice"),
            InvoiceStatus::ToInvoice => write!(f, "to_invoice"),
            InvoiceStatus::Invoiced => write!(f, "invoiced"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "not_to_invoice" => Ok(InvoiceStatus::NotToInvoice),
            "to_invoice" => Ok(InvoiceStatus::ToInvoice),
            "invoiced" => Ok(InvoiceStatus::Invoiced),
            _ => Err(format!("Invalid invoice status: {}", s)),
        }
    }
}

/// Represents a sale order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleOrder {
    /// Record identifier
    pub id: i64,

    /// Document name (e.g. "SO0042"), also used as invoice origin reference
    pub name: String,

    /// Customer the order was sold to
    pub customer_id: i64,

    /// Salesperson owning the order
    pub user_id: i64,

    /// When the order was placed
    pub order_date: DateTime<Utc>,

    /// Lifecycle state
    pub state: OrderState,

    /// Invoicing status
    pub invoice_status: InvoiceStatus,

    /// Order total including taxes
    pub amount_total: Decimal,
}

/// Predicate filter over sale orders, mirroring the host platform's
/// search domains: every populated field must match.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict to orders in any of these states
    pub states: Option<Vec<OrderState>>,

    /// Restrict to orders with this invoicing status
    pub invoice_status: Option<InvoiceStatus>,

    /// Restrict to orders owned by this user
    pub user_id: Option<i64>,
}

impl OrderFilter {
    /// Filter matching every order
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter matching active sales (confirmed or done)
    pub fn active_sales() -> Self {
        Self {
            states: Some(vec![OrderState::Confirmed, OrderState::Done]),
            ..Self::default()
        }
    }

    /// Filter matching orders with the given invoicing status
    pub fn with_invoice_status(status: InvoiceStatus) -> Self {
        Self {
            invoice_status: Some(status),
            ..Self::default()
        }
    }

    /// Scope this filter to orders owned by the given user
    pub fn owned_by(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Whether the given order satisfies every populated predicate
    pub fn matches(&self, order: &SaleOrder) -> bool {
        if let Some(states) = &self.states {
            if !states.contains(&order.state) {
                return false;
            }
        }

        if let Some(status) = self.invoice_status {
            if order.invoice_status != status {
                return false;
            }
        }

        if let Some(user_id) = self.user_id {
            if order.user_id != user_id {
                return false;
            }
        }

        true
    }
}
