//! Supplier entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, integer_storage_key};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub i32);

impl std::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

integer_storage_key!(SupplierId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: SupplierId,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

impl Supplier {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            supplier_id: SupplierId::default(),
            company_name: company_name.into(),
            contact_name: None,
            city: None,
            country: None,
            is_deleted: false,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.supplier_id = SupplierId(id);
        self
    }

    pub fn with_contact(mut self, contact_name: impl Into<String>) -> Self {
        self.contact_name = Some(contact_name.into());
        self
    }

    pub fn located_in(mut self, city: impl Into<String>, country: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self.country = Some(country.into());
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }
}

impl StorageEntity for Supplier {
    type Key = SupplierId;

    fn key(&self) -> &Self::Key {
        &self.supplier_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.supplier_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "supplierid" | "id" => Some(SortValue::Int(self.supplier_id.0.into())),
            "companyname" => Some(SortValue::Text(self.company_name.clone())),
            "contactname" => Some(self.contact_name.as_deref().into()),
            "city" => Some(self.city.as_deref().into()),
            "country" => Some(self.country.as_deref().into()),
            "isdeleted" => Some(SortValue::Bool(self.is_deleted)),
            _ => None,
        }
    }
}
