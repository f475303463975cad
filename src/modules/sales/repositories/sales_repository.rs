use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::core::Result;
use crate::modules::sales::models::{OrderFilter, Product, ProductSales, SaleOrder, SaleOrderLine};

/// Repository for sale order queries
///
/// This is the dashboard's window onto the host platform's order store. All
/// methods are read-only; `search_orders` returns orders sorted by total
/// value descending, the way the dashboard consumes them.
#[async_trait]
pub trait SalesRepository: Send + Sync {
    /// Orders matching the filter, sorted by `amount_total` descending
    async fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<SaleOrder>>;

    /// Number of orders matching the filter
    async fn count_orders(&self, filter: &OrderFilter) -> Result<u64>;

    /// Sum of `amount_total` over orders matching the filter
    async fn sum_order_totals(&self, filter: &OrderFilter) -> Result<Decimal>;

    /// Per-product sales aggregation over the lines of the given orders:
    /// grouped by product, quantity and line totals summed, sorted by
    /// summed value descending (product id ascending on ties), limited
    async fn product_sales_for_orders(
        &self,
        order_ids: &[i64],
        limit: usize,
    ) -> Result<Vec<ProductSales>>;
}

/// In-memory reference implementation backing tests and embedded use
pub struct InMemorySalesRepository {
    orders: Vec<SaleOrder>,
    lines: Vec<SaleOrderLine>,
    products: Vec<Product>,
}

impl InMemorySalesRepository {
    pub fn new(orders: Vec<SaleOrder>, lines: Vec<SaleOrderLine>, products: Vec<Product>) -> Self {
        Self {
            orders,
            lines,
            products,
        }
    }

    /// Repository over an empty order store
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

#[async_trait]
impl SalesRepository for InMemorySalesRepository {
    async fn search_orders(&self, filter: &OrderFilter) -> Result<Vec<SaleOrder>> {
        let mut matched: Vec<SaleOrder> = self
            .orders
            .iter()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect();

        // amount_total descending, id ascending so equal totals stay stable
        matched.sort_by(|a, b| {
            b.amount_total
                .cmp(&a.amount_total)
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(matched)
    }

    async fn count_orders(&self, filter: &OrderFilter) -> Result<u64> {
        let count = self
            .orders
            .iter()
            .filter(|order| filter.matches(order))
            .count();

        Ok(count as u64)
    }

    async fn sum_order_totals(&self, filter: &OrderFilter) -> Result<Decimal> {
        let sum = self
            .orders
            .iter()
            .filter(|order| filter.matches(order))
            .map(|order| order.amount_total)
            .sum();

        Ok(sum)
    }

    async fn product_sales_for_orders(
        &self,
        order_ids: &[i64],
        limit: usize,
    ) -> Result<Vec<ProductSales>> {
        let products_by_id: HashMap<i64, &Product> =
            self.products.iter().map(|p| (p.id, p)).collect();

        // Inner join: lines whose product is unknown contribute nothing.
        let mut grouped: HashMap<i64, ProductSales> = HashMap::new();
        for line in self
            .lines
            .iter()
            .filter(|line| order_ids.contains(&line.order_id))
        {
            let Some(product) = products_by_id.get(&line.product_id) else {
                continue;
            };

            let entry = grouped.entry(line.product_id).or_insert_with(|| ProductSales {
                product_id: product.id,
                product_name: product.name.clone(),
                total_quantity: Decimal::ZERO,
                total_value: Decimal::ZERO,
            });
            entry.total_quantity += line.quantity;
            entry.total_value += line.price_total;
        }

        let mut rows: Vec<ProductSales> = grouped.into_values().collect();
        rows.sort_by(|a, b| {
            b.total_value
                .cmp(&a.total_value)
                .then_with(|| a.product_id.cmp(&b.product_id))
        });
        rows.truncate(limit);

        Ok(rows)
    }
}
