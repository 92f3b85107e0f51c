//! Employee entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, integer_storage_key};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub i32);

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

integer_storage_key!(EmployeeId);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

impl Employee {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            employee_id: EmployeeId::default(),
            last_name: last_name.into(),
            first_name: first_name.into(),
            title: None,
            city: None,
            country: None,
            is_deleted: false,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.employee_id = EmployeeId(id);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
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

impl StorageEntity for Employee {
    type Key = EmployeeId;

    fn key(&self) -> &Self::Key {
        &self.employee_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.employee_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "employeeid" | "id" => Some(SortValue::Int(self.employee_id.0.into())),
            "lastname" => Some(SortValue::Text(self.last_name.clone())),
            "firstname" => Some(SortValue::Text(self.first_name.clone())),
            "title" => Some(self.title.as_deref().into()),
            "city" => Some(self.city.as_deref().into()),
            "country" => Some(self.country.as_deref().into()),
            "isdeleted" => Some(SortValue::Bool(self.is_deleted)),
            _ => None,
        }
    }
}
