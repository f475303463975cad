use async_trait::async_trait;

use crate::core::Result;
use crate::modules::contacts::models::{Country, CountryGroup, Customer};

/// Repository for customer, country and country-group lookups
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Customer record by identifier
    async fn customer_by_id(&self, id: i64) -> Result<Option<Customer>>;

    /// Country record by identifier
    async fn country_by_id(&self, id: i64) -> Result<Option<Country>>;

    /// First country group whose member countries include one with the
    /// given display name. An ambiguous name resolves to whichever group
    /// the store yields first.
    async fn group_containing_country_name(&self, name: &str) -> Result<Option<CountryGroup>>;
}

/// In-memory reference implementation backing tests and embedded use
pub struct InMemoryContactRepository {
    customers: Vec<Customer>,
    countries: Vec<Country>,
    groups: Vec<CountryGroup>,
}

impl InMemoryContactRepository {
    pub fn new(customers: Vec<Customer>, countries: Vec<Country>, groups: Vec<CountryGroup>) -> Self {
        Self {
            customers,
            countries,
            groups,
        }
    }

    /// Repository over an empty contact store
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new())
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn customer_by_id(&self, id: i64) -> Result<Option<Customer>> {
        Ok(self.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn country_by_id(&self, id: i64) -> Result<Option<Country>> {
        Ok(self.countries.iter().find(|c| c.id == id).cloned())
    }

    async fn group_containing_country_name(&self, name: &str) -> Result<Option<CountryGroup>> {
        let group = self.groups.iter().find(|group| {
            group.country_ids.iter().any(|country_id| {
                self.countries
                    .iter()
                    .any(|country| country.id == *country_id && country.name == name)
            })
        });

        Ok(group.cloned())
    }
}
