pub mod contacts;
pub mod dashboard;
pub mod invoicing;
pub mod sales;
