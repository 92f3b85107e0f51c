//! Customer entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, StorageKey};

/// Customer code, up to five characters, chosen by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub String);

impl CustomerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CustomerId {
    fn is_unassigned(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

impl Customer {
    pub fn new(customer_id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            customer_id: CustomerId::new(customer_id),
            company_name: company_name.into(),
            contact_name: None,
            city: None,
            country: None,
            is_deleted: false,
        }
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

impl StorageEntity for Customer {
    type Key = CustomerId;

    fn key(&self) -> &Self::Key {
        &self.customer_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.customer_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "customerid" | "id" => Some(SortValue::Text(self.customer_id.0.clone())),
            "companyname" => Some(SortValue::Text(self.company_name.clone())),
            "contactname" => Some(self.contact_name.as_deref().into()),
            "city" => Some(self.city.as_deref().into()),
            "country" => Some(self.country.as_deref().into()),
            "isdeleted" => Some(SortValue::Bool(self.is_deleted)),
            _ => None,
        }
    }
}
