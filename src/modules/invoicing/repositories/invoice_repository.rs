use async_trait::async_trait;

use crate::core::Result;
use crate::modules::invoicing::models::{CustomerInvoice, InvoiceFilter};

/// Repository for accounting-document queries
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Documents matching the filter, in store order
    async fn search_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<CustomerInvoice>>;
}

/// In-memory reference implementation backing tests and embedded use
pub struct InMemoryInvoiceRepository {
    invoices: Vec<CustomerInvoice>,
}

impl InMemoryInvoiceRepository {
    pub fn new(invoices: Vec<CustomerInvoice>) -> Self {
        Self { invoices }
    }

    /// Repository over an empty document store
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl InvoiceRepository for InMemoryInvoiceRepository {
    async fn search_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<CustomerInvoice>> {
        let matched = self
            .invoices
            .iter()
            .filter(|invoice| filter.matches(invoice))
            .cloned()
            .collect();

        Ok(matched)
    }
}
