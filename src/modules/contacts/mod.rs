pub mod models;
pub mod repositories;

pub use models::{Country, CountryGroup, Customer};
pub use repositories::{ContactRepository, InMemoryContactRepository};
