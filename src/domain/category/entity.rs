//! Category entity

use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, integer_storage_key};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

integer_storage_key!(CategoryId);

/// Product category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub description: Option<String>,
    pub is_deleted: bool,
}

impl Category {
    pub fn new(category_name: impl Into<String>) -> Self {
        Self {
            category_id: CategoryId::default(),
            category_name: category_name.into(),
            description: None,
            is_deleted: false,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.category_id = CategoryId(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn deleted(mut self) -> Self {
        self.is_deleted = true;
        self
    }
}

impl StorageEntity for Category {
    type Key = CategoryId;

    fn key(&self) -> &Self::Key {
        &self.category_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.category_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "categoryid" | "id" => Some(SortValue::Int(self.category_id.0.into())),
            "categoryname" | "name" => Some(SortValue::Text(self.category_name.clone())),
            "description" => Some(self.description.as_deref().into()),
            "isdeleted" => Some(SortValue::Bool(self.is_deleted)),
            _ => None,
        }
    }
}
