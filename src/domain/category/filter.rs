//! Category list filter

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{EntityFilter, equals, fingerprint_of, text_contains};

use super::entity::Category;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryFilter {
    pub category_name: Option<String>,
    pub is_deleted: Option<bool>,
}

impl EntityFilter<Category> for CategoryFilter {
    fn matches(&self, category: &Category) -> bool {
        text_contains(
            Some(category.category_name.as_str()),
            self.category_name.as_deref(),
        ) && equals(&category.is_deleted, self.is_deleted.as_ref())
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}
