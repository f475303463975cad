mod balance_resolver;

pub use balance_resolver::BalanceResolver;
