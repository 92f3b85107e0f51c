//! Supplier list filter

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{EntityFilter, equals, fingerprint_of, text_contains};

use super::entity::Supplier;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplierFilter {
    pub company_name: Option<String>,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: Option<bool>,
}

impl EntityFilter<Supplier> for SupplierFilter {
    fn matches(&self, supplier: &Supplier) -> bool {
        text_contains(
            Some(supplier.company_name.as_str()),
            self.company_name.as_deref(),
        ) && text_contains(supplier.contact_name.as_deref(), self.contact_name.as_deref())
            && text_contains(supplier.city.as_deref(), self.city.as_deref())
            && text_contains(supplier.country.as_deref(), self.country.as_deref())
            && equals(&supplier.is_deleted, self.is_deleted.as_ref())
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exotic_liquids() -> Supplier {
        Supplier::new("Exotic Liquids")
            .with_id(1)
            .with_contact("Charlotte Cooper")
            .located_in("London", "UK")
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(SupplierFilter::default().matches(&exotic_liquids()));
        assert!(SupplierFilter::default().matches(&exotic_liquids().deleted()));
    }

    #[test]
    fn test_company_and_contact() {
        let filter = SupplierFilter {
            company_name: Some("exotic".to_string()),
            contact_name: Some("COOPER".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&exotic_liquids()));

        let filter = SupplierFilter {
            company_name: Some("cajun".to_string()),
            ..Default::default()
        };
        assert!(!filter.matches(&exotic_liquids()));
    }

    #[test]
    fn test_missing_location_fails_a_location_condition() {
        let filter = SupplierFilter {
            country: Some("uk".to_string()),
            ..Default::default()
        };

        assert!(filter.matches(&exotic_liquids()));
        assert!(!filter.matches(&Supplier::new("Tokyo Traders").with_id(4)));
    }

    #[test]
    fn test_deleted_marker() {
        let filter = SupplierFilter {
            is_deleted: Some(true),
            ..Default::default()
        };

        assert!(filter.matches(&exotic_liquids().deleted()));
        assert!(!filter.matches(&exotic_liquids()));
    }

    #[test]
    fn test_fingerprint_differs_from_empty_filter() {
        let filter = SupplierFilter {
            city: Some("London".to_string()),
            ..Default::default()
        };

        assert_ne!(
            filter.fingerprint().unwrap(),
            SupplierFilter::default().fingerprint().unwrap()
        );
    }
}
