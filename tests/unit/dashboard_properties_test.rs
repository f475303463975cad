// Property-based tests for the dashboard aggregation invariants:
// leaderboard cap and ordering, waterfall consistency of the
// country/region roll-ups, counter subset relations, and idempotence.

use std::sync::Arc;

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use salesdash::config::DashboardConfig;
use salesdash::contacts::{Country, CountryGroup, Customer, InMemoryContactRepository};
use salesdash::core::Currency;
use salesdash::dashboard::{DashboardService, SalesDashboard};
use salesdash::invoicing::{BalanceResolver, InMemoryInvoiceRepository};
use salesdash::sales::{
    InMemorySalesRepository, InvoiceStatus, OrderState, Product, SaleOrder, SaleOrderLine,
};

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("Failed to build test runtime")
        .block_on(future)
}

/// Customers 1-3 in France, 4-6 in Germany, 7-8 without a country;
/// France and Germany roll up into Europe, Brazil is grouped but unsold.
fn contact_fixture() -> InMemoryContactRepository {
    let customers = vec![
        Customer { id: 1, name: "Acme".to_string(), country_id: Some(10) },
        Customer { id: 2, name: "Globex".to_string(), country_id: Some(10) },
        Customer { id: 3, name: "Initech".to_string(), country_id: Some(10) },
        Customer { id: 4, name: "Umbrella".to_string(), country_id: Some(11) },
        Customer { id: 5, name: "Hooli".to_string(), country_id: Some(11) },
        Customer { id: 6, name: "Stark".to_string(), country_id: Some(11) },
        Customer { id: 7, name: "Wanderer".to_string(), country_id: None },
        Customer { id: 8, name: "Drifter".to_string(), country_id: None },
    ];
    let countries = vec![
        Country { id: 10, name: "France".to_string() },
        Country { id: 11, name: "Germany".to_string() },
        Country { id: 12, name: "Brazil".to_string() },
    ];
    let groups = vec![
        CountryGroup { id: 100, name: "Europe".to_string(), country_ids: vec![10, 11] },
        CountryGroup { id: 101, name: "South America".to_string(), country_ids: vec![12] },
    ];

    InMemoryContactRepository::new(customers, countries, groups)
}

fn product_fixture() -> Vec<Product> {
    (1..=6)
        .map(|id| Product {
            id,
            name: format!("Product {}", id),
        })
        .collect()
}

fn build_service(orders: Vec<SaleOrder>, lines: Vec<SaleOrderLine>) -> DashboardService {
    DashboardService::new(
        Arc::new(InMemorySalesRepository::new(orders, lines, product_fixture())),
        Arc::new(contact_fixture()),
        BalanceResolver::new(Arc::new(InMemoryInvoiceRepository::empty())),
        &DashboardConfig {
            currency: Currency::USD,
        },
    )
}

fn state_strategy() -> impl Strategy<Value = OrderState> {
    prop_oneof![
        Just(OrderState::Draft),
        Just(OrderState::Confirmed),
        Just(OrderState::Done),
        Just(OrderState::Cancelled),
    ]
}

fn status_strategy() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::NotToInvoice),
        Just(InvoiceStatus::ToInvoice),
        Just(InvoiceStatus::Invoiced),
    ]
}

fn orders_strategy() -> impl Strategy<Value = Vec<SaleOrder>> {
    prop::collection::vec(
        (1i64..=8, 1i64..=3, state_strategy(), status_strategy(), 0u32..1_000_000),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (customer_id, user_id, state, invoice_status, cents))| SaleOrder {
                id: idx as i64 + 1,
                name: format!("SO{:04}", idx + 1),
                customer_id,
                user_id,
                order_date: Utc::now(),
                state,
                invoice_status,
                amount_total: Decimal::from(cents) / Decimal::from(100),
            })
            .collect()
    })
}

fn dataset_strategy() -> impl Strategy<Value = (Vec<SaleOrder>, Vec<SaleOrderLine>)> {
    orders_strategy().prop_flat_map(|orders| {
        let order_count = orders.len() as i64;
        let lines = if order_count == 0 {
            Just(Vec::<SaleOrderLine>::new()).boxed()
        } else {
            prop::collection::vec((1i64..=order_count, 1i64..=6, 1u32..20, 0u32..500_000), 0..60)
                .prop_map(|rows| {
                    rows.into_iter()
                        .enumerate()
                        .map(|(idx, (order_id, product_id, qty, cents))| SaleOrderLine {
                            id: idx as i64 + 1,
                            order_id,
                            product_id,
                            quantity: Decimal::from(qty),
                            price_total: Decimal::from(cents) / Decimal::from(100),
                        })
                        .collect()
                })
                .boxed()
        };
        (Just(orders), lines)
    })
}

fn retrieve(orders: Vec<SaleOrder>, lines: Vec<SaleOrderLine>, user_id: i64) -> SalesDashboard {
    let service = build_service(orders, lines);
    block_on(service.retrieve_dashboard(user_id)).expect("Failed to retrieve dashboard")
}

proptest! {
    /// Property: the product leaderboard never exceeds five entries and
    /// is sorted descending by summed value
    #[test]
    fn prop_top_products_capped_and_sorted((orders, lines) in dataset_strategy()) {
        let dashboard = retrieve(orders, lines, 1);
        let top = &dashboard.top_products_by_value;

        prop_assert!(top.len() <= 5, "leaderboard overflow: {}", top.len());
        prop_assert!(
            top.windows(2).all(|w| w[0].total_value >= w[1].total_value),
            "leaderboard not sorted descending"
        );
    }

    /// Property: the customer leaderboard never exceeds five entries and
    /// is sorted descending by summed value
    #[test]
    fn prop_top_customers_capped_and_sorted((orders, lines) in dataset_strategy()) {
        let dashboard = retrieve(orders, lines, 1);
        let top = &dashboard.top_customers_by_value;

        prop_assert!(top.len() <= 5);
        prop_assert!(top.windows(2).all(|w| w[0].total_value >= w[1].total_value));
    }

    /// Property: country totals sum exactly the top customers mapping to
    /// that country, and region totals sum exactly their country totals.
    /// The roll-ups therefore cover the leaderboard, never the full
    /// customer base.
    #[test]
    fn prop_waterfall_roll_ups_are_consistent((orders, lines) in dataset_strategy()) {
        let dashboard = retrieve(orders, lines, 1);

        for country in &dashboard.top_countries_by_value {
            let expected: Decimal = dashboard
                .top_customers_by_value
                .iter()
                .filter(|customer| customer.country_name == country.country)
                .map(|customer| customer.total_value)
                .sum();
            prop_assert_eq!(country.total_value, expected, "country {} diverges", &country.country);
        }

        for region in &dashboard.top_regions_by_value {
            let expected: Decimal = dashboard
                .top_countries_by_value
                .iter()
                .filter(|country| country.region == region.region_name)
                .map(|country| country.total_value)
                .sum();
            prop_assert_eq!(region.total_value, expected, "region {} diverges", &region.region_name);
        }

        let leaderboard_total: Decimal = dashboard
            .top_customers_by_value
            .iter()
            .map(|customer| customer.total_value)
            .sum();
        let region_total: Decimal = dashboard
            .top_regions_by_value
            .iter()
            .map(|region| region.total_value)
            .sum();
        prop_assert_eq!(region_total, leaderboard_total);
    }

    /// Property: the active-sales monetary total equals the sum of order
    /// totals over confirmed/done orders
    #[test]
    fn prop_total_sale_amount_matches_active_orders((orders, lines) in dataset_strategy()) {
        let expected: Decimal = orders
            .iter()
            .filter(|order| order.state.is_active_sale())
            .map(|order| order.amount_total)
            .sum();

        let dashboard = retrieve(orders, lines, 1);

        prop_assert_eq!(dashboard.counters.total_sale_amount, expected);
    }

    /// Property: user-scoped counters are subsets of their global
    /// counterparts, for every user
    #[test]
    fn prop_user_counters_are_subsets((orders, lines) in dataset_strategy(), user_id in 1i64..=3) {
        let counters = retrieve(orders, lines, user_id).counters;

        prop_assert!(counters.my_total_orders <= counters.total_orders);
        prop_assert!(counters.my_sale_orders <= counters.sale_orders);
        prop_assert!(counters.my_to_invoice <= counters.to_invoice);
        prop_assert!(counters.my_invoiced <= counters.invoiced);
    }

    /// Property: retrieval is idempotent against unchanged data
    #[test]
    fn prop_retrieval_is_idempotent((orders, lines) in dataset_strategy()) {
        let service = build_service(orders, lines);

        let first = block_on(service.retrieve_dashboard(1)).expect("Failed to retrieve dashboard");
        let second = block_on(service.retrieve_dashboard(1)).expect("Failed to retrieve dashboard");

        prop_assert_eq!(first, second);
    }
}
