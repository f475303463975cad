// Accounting documents as exposed by the host platform, reduced to the
// fields the dashboard's outstanding-balance computation reads.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Posting state of an accounting document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceState {
    /// Not yet posted to the ledger
    Draft,

    /// Posted and legally effective
    Posted,

    /// Cancelled document
    Cancelled,
}

/// Payment state of a posted document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    /// No payment registered
    NotPaid,

    /// Partially paid, residual outstanding
    Partial,

    /// Fully paid
    Paid,
}

/// Kind of accounting document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceKind {
    /// Invoice issued to a customer
    CustomerInvoice,

    /// Credit note issued to a customer
    CustomerCreditNote,

    /// Bill received from a vendor
    VendorBill,
}

/// An accounting document (invoice, credit note, bill)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInvoice {
    /// Record identifier
    pub id: i64,

    /// Document kind
    pub kind: InvoiceKind,

    /// Posting state
    pub state: InvoiceState,

    /// Payment state
    pub payment_state: PaymentState,

    /// Name of the source document this invoice was generated from
    /// (a sale order name, for invoices originating in sales)
    pub origin: Option<String>,

    /// Accounting date of the document
    pub invoice_date: NaiveDate,

    /// Document total including taxes
    pub amount_total: Decimal,

    /// Amount still due
    pub amount_residual: Decimal,
}

/// Predicate filter over accounting documents: every populated field
/// must match.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    /// Restrict to documents of this kind
    pub kind: Option<InvoiceKind>,

    /// Restrict to documents in this posting state
    pub state: Option<InvoiceState>,

    /// Restrict to documents in this payment state
    pub payment_state: Option<PaymentState>,
}

impl InvoiceFilter {
    /// Posted, partially-paid customer invoices — the population carrying
    /// a partial-payment residual
    pub fn partially_paid_customer_invoices() -> Self {
        Self {
            kind: Some(InvoiceKind::CustomerInvoice),
            state: Some(InvoiceState::Posted),
            payment_state: Some(PaymentState::Partial),
        }
    }

    /// Whether the given document satisfies every populated predicate
    pub fn matches(&self, invoice: &CustomerInvoice) -> bool {
        if let Some(kind) = self.kind {
            if invoice.kind != kind {
                return false;
            }
        }

        if let Some(state) = self.state {
            if invoice.state != state {
                return false;
            }
        }

        if let Some(payment_state) = self.payment_state {
            if invoice.payment_state != payment_state {
                return false;
            }
        }

        true
    }
}
