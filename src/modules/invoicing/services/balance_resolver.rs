use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::core::Result;
use crate::modules::invoicing::models::InvoiceFilter;
use crate::modules::invoicing::repositories::InvoiceRepository;

/// Resolves the partial-payment residual carried by sale orders.
///
/// Invoices are correlated to orders by comparing the invoice's origin
/// document name with the order's name. That correlation is string
/// equality, not a foreign key: a renamed order or a colliding document
/// name silently breaks the match. The comparison lives here, and only
/// here.
pub struct BalanceResolver {
    invoice_repo: Arc<dyn InvoiceRepository>,
}

impl BalanceResolver {
    pub fn new(invoice_repo: Arc<dyn InvoiceRepository>) -> Self {
        Self { invoice_repo }
    }

    /// Sum of residual amounts on posted, partially-paid customer invoices
    /// whose origin name matches one of the given order names.
    ///
    /// No matching invoices yields zero, never an error.
    pub async fn partial_payment_residual(
        &self,
        order_names: &HashSet<String>,
    ) -> Result<Decimal> {
        let invoices = self
            .invoice_repo
            .search_invoices(&InvoiceFilter::partially_paid_customer_invoices())
            .await?;

        let residual: Decimal = invoices
            .iter()
            .filter(|invoice| {
                invoice
                    .origin
                    .as_deref()
                    .is_some_and(|origin| order_names.contains(origin))
            })
            .map(|invoice| invoice.amount_residual)
            .sum();

        debug!(
            candidates = invoices.len(),
            %residual,
            "resolved partial-payment residual"
        );

        Ok(residual)
    }
}
