pub mod models;
pub mod services;

pub use models::{
    CountryAggregate, DashboardCounters, RankedCustomer, RankedProduct, RegionAggregate,
    SalesDashboard,
};
pub use services::DashboardService;
