mod sales_repository;

pub use sales_repository::{InMemorySalesRepository, SalesRepository};
