//! Customer list filter

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{EntityFilter, equals, fingerprint_of, text_contains};

use super::entity::Customer;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerFilter {
    pub customer_id: Option<String>,
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: Option<bool>,
}

impl EntityFilter<Customer> for CustomerFilter {
    fn matches(&self, customer: &Customer) -> bool {
        text_contains(
            Some(customer.customer_id.as_str()),
            self.customer_id.as_deref(),
        ) && text_contains(
            Some(customer.company_name.as_str()),
            self.company_name.as_deref(),
        ) && text_contains(customer.contact_name.as_deref(), self.contact_name.as_deref())
            && text_contains(customer.city.as_deref(), self.city.as_deref())
            && text_contains(customer.country.as_deref(), self.country.as_deref())
            && equals(&customer.is_deleted, self.is_deleted.as_ref())
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_filter_skips_customers_without_country() {
        let filter = CustomerFilter {
            country: Some("germany".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&Customer::new("ALFKI", "Alfreds").located_in("Berlin", "Germany")));
        assert!(!filter.matches(&Customer::new("ANATR", "Ana Trujillo")));
    }
}
