mod dashboard;

pub use dashboard::{
    CountryAggregate, DashboardCounters, RankedCustomer, RankedProduct, RegionAggregate,
    SalesDashboard,
};
