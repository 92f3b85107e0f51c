//! Product list filter

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{
    EntityFilter, equals, fingerprint_of, serialize_float_bound, text_contains, within,
};

use super::entity::Product;

/// Optional conditions on products; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductFilter {
    pub product_name: Option<String>,
    pub category_id: Option<i32>,
    pub supplier_id: Option<i32>,
    #[serde(serialize_with = "serialize_float_bound")]
    pub min_price: Option<f64>,
    #[serde(serialize_with = "serialize_float_bound")]
    pub max_price: Option<f64>,
    pub discontinued: Option<bool>,
}

impl EntityFilter<Product> for ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        text_contains(Some(product.product_name.as_str()), self.product_name.as_deref())
            && (self.category_id.is_none() || product.category_id == self.category_id)
            && (self.supplier_id.is_none() || product.supplier_id == self.supplier_id)
            && within(
                product.unit_price.as_ref(),
                self.min_price.as_ref(),
                self.max_price.as_ref(),
            )
            && equals(&product.discontinued, self.discontinued.as_ref())
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chai() -> Product {
        Product::new("Chai")
            .with_id(1)
            .with_category(1)
            .with_supplier(1)
            .with_unit_price(18.0)
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(ProductFilter::default().matches(&chai()));
        assert!(ProductFilter::default().matches(&chai().discontinued()));
    }

    #[test]
    fn test_price_range() {
        let filter = ProductFilter {
            min_price: Some(10.0),
            max_price: Some(20.0),
            ..Default::default()
        };
        assert!(filter.matches(&chai()));

        let filter = ProductFilter {
            max_price: Some(15.0),
            ..Default::default()
        };
        assert!(!filter.matches(&chai()));
    }

    #[test]
    fn test_name_and_discontinued() {
        let filter = ProductFilter {
            product_name: Some("CHA".to_string()),
            discontinued: Some(false),
            ..Default::default()
        };

        assert!(filter.matches(&chai()));
        assert!(!filter.matches(&chai().discontinued()));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let filter = ProductFilter {
            category_id: Some(2),
            ..Default::default()
        };

        assert_eq!(filter.fingerprint().unwrap(), filter.clone().fingerprint().unwrap());
        assert_ne!(
            filter.fingerprint().unwrap(),
            ProductFilter::default().fingerprint().unwrap()
        );
    }

    #[test]
    fn test_non_finite_bounds_have_their_own_fingerprint() {
        let unbounded = ProductFilter::default().fingerprint().unwrap();

        for bound in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let min = ProductFilter {
                min_price: Some(bound),
                ..Default::default()
            };
            let max = ProductFilter {
                max_price: Some(bound),
                ..Default::default()
            };

            assert_ne!(min.fingerprint().unwrap(), unbounded);
            assert_ne!(max.fingerprint().unwrap(), unbounded);
        }
    }

    #[test]
    fn test_nan_bound_matches_nothing() {
        let filter = ProductFilter {
            min_price: Some(f64::NAN),
            ..Default::default()
        };

        assert!(!filter.matches(&chai()));
    }
}
