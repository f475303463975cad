mod customer_invoice;

pub use customer_invoice::{CustomerInvoice, InvoiceFilter, InvoiceKind, InvoiceState, PaymentState};
