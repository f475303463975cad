use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::DashboardConfig;
use crate::core::{AppError, Currency, Result};
use crate::modules::contacts::repositories::ContactRepository;
use crate::modules::dashboard::models::{
    CountryAggregate, DashboardCounters, RankedCustomer, RankedProduct, RegionAggregate,
    SalesDashboard,
};
use crate::modules::invoicing::services::BalanceResolver;
use crate::modules::sales::models::{InvoiceStatus, OrderFilter, SaleOrder};
use crate::modules::sales::repositories::SalesRepository;

/// Leaderboards are capped at this many entries
const TOP_RANK_LIMIT: usize = 5;

/// Region label used when a country name resolves to no country group
const UNKNOWN_REGION: &str = "Unknown";

/// Service assembling the sales dashboard
///
/// One call produces the full result: product and customer leaderboards,
/// the country/region roll-ups derived from the customer leaderboard, and
/// the order/invoice counters. The computation is a read-only pass over
/// the backing repositories; repeated calls against unchanged data return
/// identical results.
pub struct DashboardService {
    sales_repo: Arc<dyn SalesRepository>,
    contact_repo: Arc<dyn ContactRepository>,
    balance_resolver: BalanceResolver,
    currency: Currency,
}

impl DashboardService {
    /// Create a new dashboard service
    pub fn new(
        sales_repo: Arc<dyn SalesRepository>,
        contact_repo: Arc<dyn ContactRepository>,
        balance_resolver: BalanceResolver,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            sales_repo,
            contact_repo,
            balance_resolver,
            currency: config.currency,
        }
    }

    /// Assemble the dashboard for the given requesting user
    ///
    /// # Arguments
    /// * `user_id` - Identity of the requesting user, used only to scope
    ///   the "my orders" counters
    ///
    /// # Returns
    /// A fully-populated `SalesDashboard`. Absence of matching orders or
    /// invoices yields empty lists and zero counters, never an error.
    pub async fn retrieve_dashboard(&self, user_id: i64) -> Result<SalesDashboard> {
        let active_orders = self
            .sales_repo
            .search_orders(&OrderFilter::active_sales())
            .await?;

        if active_orders.is_empty() {
            warn!("no active sale orders, dashboard leaderboards will be empty");
        }

        let top_products_by_value = self.top_products_by_value(&active_orders).await?;
        let top_customers_by_value = self.top_customers_by_value(&active_orders).await?;
        let top_countries_by_value = self.countries_of(&top_customers_by_value).await?;
        let top_regions_by_value = Self::regions_of(&top_countries_by_value);
        let counters = self.collect_counters(user_id).await?;

        info!(
            products = top_products_by_value.len(),
            customers = top_customers_by_value.len(),
            countries = top_countries_by_value.len(),
            regions = top_regions_by_value.len(),
            "assembled sales dashboard"
        );

        Ok(SalesDashboard {
            top_products_by_value,
            top_customers_by_value,
            top_countries_by_value,
            top_regions_by_value,
            counters,
        })
    }

    /// Top products by summed line value across the given active orders
    async fn top_products_by_value(
        &self,
        active_orders: &[SaleOrder],
    ) -> Result<Vec<RankedProduct>> {
        if active_orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i64> = active_orders.iter().map(|order| order.id).collect();
        let rows = self
            .sales_repo
            .product_sales_for_orders(&order_ids, TOP_RANK_LIMIT)
            .await?;

        let ranked = rows
            .into_iter()
            .map(|row| RankedProduct {
                product_id: row.product_id,
                product_name: row.product_name,
                total_value: row.total_value,
            })
            .collect();

        Ok(ranked)
    }

    /// Top customers by summed order total across the given active orders
    async fn top_customers_by_value(
        &self,
        active_orders: &[SaleOrder],
    ) -> Result<Vec<RankedCustomer>> {
        let mut totals_by_customer: HashMap<i64, Decimal> = HashMap::new();
        for order in active_orders {
            *totals_by_customer.entry(order.customer_id).or_default() += order.amount_total;
        }

        // value descending, customer id ascending so equal totals stay stable
        let mut leaderboard: Vec<(i64, Decimal)> = totals_by_customer.into_iter().collect();
        leaderboard.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        leaderboard.truncate(TOP_RANK_LIMIT);

        let mut ranked = Vec::with_capacity(leaderboard.len());
        for (customer_id, total_value) in leaderboard {
            let customer = self
                .contact_repo
                .customer_by_id(customer_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("customer {}", customer_id)))?;

            let country = match customer.country_id {
                Some(country_id) => self.contact_repo.country_by_id(country_id).await?,
                None => None,
            };

            ranked.push(RankedCustomer {
                customer_id: customer.id,
                customer_name: customer.name,
                total_value,
                country_id: country.as_ref().map(|c| c.id),
                country_name: country.map(|c| c.name).unwrap_or_default(),
            });
        }

        Ok(ranked)
    }

    /// Group the customer leaderboard by country name.
    ///
    /// Consumes only the already-selected top customers: country totals
    /// cover the leaderboard, not the full customer base. Grouping
    /// preserves the leaderboard's encounter order.
    async fn countries_of(&self, top_customers: &[RankedCustomer]) -> Result<Vec<CountryAggregate>> {
        let mut aggregates: Vec<CountryAggregate> = Vec::new();

        for customer in top_customers {
            if let Some(existing) = aggregates
                .iter_mut()
                .find(|aggregate| aggregate.country == customer.country_name)
            {
                existing.total_value += customer.total_value;
                continue;
            }

            let region = self
                .contact_repo
                .group_containing_country_name(&customer.country_name)
                .await?
                .map(|group| group.name)
                .unwrap_or_else(|| UNKNOWN_REGION.to_string());

            aggregates.push(CountryAggregate {
                country: customer.country_name.clone(),
                total_value: customer.total_value,
                region,
            });
        }

        debug!(countries = aggregates.len(), "grouped leaderboard by country");

        Ok(aggregates)
    }

    /// Roll the country aggregates up by region name, preserving their
    /// encounter order
    fn regions_of(countries: &[CountryAggregate]) -> Vec<RegionAggregate> {
        let mut aggregates: Vec<RegionAggregate> = Vec::new();

        for country in countries {
            if let Some(existing) = aggregates
                .iter_mut()
                .find(|aggregate| aggregate.region_name == country.region)
            {
                existing.total_value += country.total_value;
            } else {
                aggregates.push(RegionAggregate {
                    region_name: country.region.clone(),
                    total_value: country.total_value,
                });
            }
        }

        aggregates
    }

    /// Order counts, monetary sums and their display strings
    async fn collect_counters(&self, user_id: i64) -> Result<DashboardCounters> {
        let total_orders = self.sales_repo.count_orders(&OrderFilter::all()).await?;
        let sale_orders = self
            .sales_repo
            .count_orders(&OrderFilter::active_sales())
            .await?;
        let to_invoice = self
            .sales_repo
            .count_orders(&OrderFilter::with_invoice_status(InvoiceStatus::ToInvoice))
            .await?;
        let invoiced = self
            .sales_repo
            .count_orders(&OrderFilter::with_invoice_status(InvoiceStatus::Invoiced))
            .await?;

        let my_total_orders = self
            .sales_repo
            .count_orders(&OrderFilter::all().owned_by(user_id))
            .await?;
        let my_sale_orders = self
            .sales_repo
            .count_orders(&OrderFilter::active_sales().owned_by(user_id))
            .await?;
        let my_to_invoice = self
            .sales_repo
            .count_orders(
                &OrderFilter::with_invoice_status(InvoiceStatus::ToInvoice).owned_by(user_id),
            )
            .await?;
        let my_invoiced = self
            .sales_repo
            .count_orders(
                &OrderFilter::with_invoice_status(InvoiceStatus::Invoiced).owned_by(user_id),
            )
            .await?;

        let total_sale_amount = self
            .sales_repo
            .sum_order_totals(&OrderFilter::active_sales())
            .await?;
        let total_invoice_amount = self
            .sales_repo
            .sum_order_totals(&OrderFilter::with_invoice_status(InvoiceStatus::Invoiced))
            .await?;

        // The residual correlation matches against every order name, not
        // just active ones.
        let order_names: HashSet<String> = self
            .sales_repo
            .search_orders(&OrderFilter::all())
            .await?
            .into_iter()
            .map(|order| order.name)
            .collect();
        let balance_amount = self
            .balance_resolver
            .partial_payment_residual(&order_names)
            .await?;

        let total_paid_amount = total_invoice_amount - balance_amount;

        Ok(DashboardCounters {
            total_orders,
            sale_orders,
            to_invoice,
            invoiced,
            my_total_orders,
            my_sale_orders,
            my_to_invoice,
            my_invoiced,
            total_sale_amount,
            total_invoice_amount,
            total_paid_amount,
            balance_amount,
            total_sale_display: self.currency.format_amount(total_sale_amount),
            total_invoice_display: self.currency.format_amount(total_invoice_amount),
            total_paid_display: self.currency.format_amount(total_paid_amount),
            balance_display: self.currency.format_amount(balance_amount),
        })
    }
}
