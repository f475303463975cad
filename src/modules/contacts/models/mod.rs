mod country;
mod customer;

pub use country::{Country, CountryGroup};
pub use customer::Customer;
