pub mod models;
pub mod repositories;

pub use models::{OrderFilter, OrderState, InvoiceStatus, Product, ProductSales, SaleOrder, SaleOrderLine};
pub use repositories::{InMemorySalesRepository, SalesRepository};
