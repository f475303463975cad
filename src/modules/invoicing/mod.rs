pub mod models;
pub mod repositories;
pub mod services;

pub use models::{CustomerInvoice, InvoiceFilter, InvoiceKind, InvoiceState, PaymentState};
pub use repositories::{InMemoryInvoiceRepository, InvoiceRepository};
pub use services::BalanceResolver;
