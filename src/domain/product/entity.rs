//! Product entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, integer_storage_key};

/// Product identifier, assigned by the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

integer_storage_key!(ProductId);

/// A catalog product
///
/// Products are never removed; deleting one marks it `discontinued`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i16>,
    pub discontinued: bool,
}

impl Product {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_id: ProductId::default(),
            product_name: product_name.into(),
            supplier_id: None,
            category_id: None,
            quantity_per_unit: None,
            unit_price: None,
            units_in_stock: None,
            discontinued: false,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.product_id = ProductId(id);
        self
    }

    pub fn with_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_supplier(mut self, supplier_id: i32) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    pub fn with_units_in_stock(mut self, units: i16) -> Self {
        self.units_in_stock = Some(units);
        self
    }

    pub fn with_quantity_per_unit(mut self, quantity: impl Into<String>) -> Self {
        self.quantity_per_unit = Some(quantity.into());
        self
    }

    pub fn discontinued(mut self) -> Self {
        self.discontinued = true;
        self
    }
}

impl StorageEntity for Product {
    type Key = ProductId;

    fn key(&self) -> &Self::Key {
        &self.product_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.product_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        let value = match field {
            "productid" | "id" => SortValue::Int(self.product_id.0.into()),
            "productname" | "name" => SortValue::Text(self.product_name.clone()),
            "supplierid" => self.supplier_id.map_or(SortValue::Null, |v| SortValue::Int(v.into())),
            "categoryid" => self.category_id.map_or(SortValue::Null, |v| SortValue::Int(v.into())),
            "quantityperunit" => self.quantity_per_unit.as_deref().into(),
            "unitprice" | "price" => self.unit_price.into(),
            "unitsinstock" => self
                .units_in_stock
                .map_or(SortValue::Null, |v| SortValue::Int(v.into())),
            "discontinued" => SortValue::Bool(self.discontinued),
            _ => return None,
        };

        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::StorageKey;

    #[test]
    fn test_new_product_has_unassigned_key() {
        let product = Product::new("Chai");
        assert!(product.key().is_unassigned());
        assert!(!product.discontinued);
    }

    #[test]
    fn test_sort_values() {
        let product = Product::new("Chai").with_id(1).with_unit_price(18.0);

        assert_eq!(product.sort_value("unitprice"), Some(SortValue::Float(18.0)));
        assert_eq!(product.sort_value("unitsinstock"), Some(SortValue::Null));
        assert_eq!(product.sort_value("productname"), Some(SortValue::Text("Chai".into())));
        assert_eq!(product.sort_value("colour"), None);
    }
}
