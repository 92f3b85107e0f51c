//! Employee list filter

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{EntityFilter, equals, fingerprint_of, text_contains};

use super::entity::Employee;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeFilter {
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: Option<bool>,
}

impl EntityFilter<Employee> for EmployeeFilter {
    fn matches(&self, employee: &Employee) -> bool {
        text_contains(Some(employee.last_name.as_str()), self.last_name.as_deref())
            && text_contains(Some(employee.first_name.as_str()), self.first_name.as_deref())
            && text_contains(employee.title.as_deref(), self.title.as_deref())
            && text_contains(employee.city.as_deref(), self.city.as_deref())
            && text_contains(employee.country.as_deref(), self.country.as_deref())
            && equals(&employee.is_deleted, self.is_deleted.as_ref())
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}
