//! Employee service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::employee::{
    CreateEmployeeDto, Employee, EmployeeDto, EmployeeFilter, EmployeeId, UpdateEmployeeDto,
};
use crate::domain::storage::Storage;

use super::entity_service::{EntityService, ListParams};

pub const EMPLOYEE_CACHE_PREFIX: &str = "employee_list_";

pub type EmployeeService = EntityService<EmployeeMapper, EmployeeHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeMapper;

impl EntityMapper for EmployeeMapper {
    type Entity = Employee;
    type Dto = EmployeeDto;
    type CreateDto = CreateEmployeeDto;
    type UpdateDto = UpdateEmployeeDto;

    fn to_dto(&self, employee: &Employee) -> EmployeeDto {
        EmployeeDto {
            employee_id: employee.employee_id.0,
            last_name: employee.last_name.clone(),
            first_name: employee.first_name.clone(),
            title: employee.title.clone(),
            city: employee.city.clone(),
            country: employee.country.clone(),
            is_deleted: employee.is_deleted,
        }
    }

    fn to_entity(&self, dto: CreateEmployeeDto) -> Employee {
        Employee {
            employee_id: EmployeeId::default(),
            last_name: dto.last_name,
            first_name: dto.first_name,
            title: dto.title,
            city: dto.city,
            country: dto.country,
            is_deleted: false,
        }
    }

    fn apply_update(&self, dto: &UpdateEmployeeDto, employee: &mut Employee) {
        employee.last_name = dto.last_name.clone();
        employee.first_name = dto.first_name.clone();
        employee.title = dto.title.clone();
        employee.city = dto.city.clone();
        employee.country = dto.country.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeHooks;

fn require_title(title: Option<&str>) -> BusinessValidation {
    match title {
        Some(t) if !t.trim().is_empty() => BusinessValidation::Valid,
        _ => BusinessValidation::invalid(
            "Validation failed",
            vec!["title: is required".to_string()],
        ),
    }
}

#[async_trait]
impl EntityHooks<EmployeeMapper> for EmployeeHooks {
    async fn validate_for_create(&self, dto: &CreateEmployeeDto) -> BusinessValidation {
        BusinessValidation::check(dto).and(require_title(dto.title.as_deref()))
    }

    async fn validate_for_update(
        &self,
        dto: &UpdateEmployeeDto,
        existing: &Employee,
    ) -> BusinessValidation {
        if existing.is_deleted {
            return BusinessValidation::rejected("Deleted employees cannot be updated");
        }

        BusinessValidation::check(dto).and(require_title(dto.title.as_deref()))
    }

    fn key_from_update(&self, dto: &UpdateEmployeeDto) -> EmployeeId {
        EmployeeId(dto.employee_id)
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn soft_delete(&self, employee: &mut Employee) {
        employee.is_deleted = true;
    }
}

impl EntityService<EmployeeMapper, EmployeeHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Employee>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(
            storage,
            cache,
            EmployeeMapper,
            EmployeeHooks,
            EMPLOYEE_CACHE_PREFIX,
            "Employee",
        )
    }

    pub async fn list_employees(
        &self,
        filter: &EmployeeFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<EmployeeDto>> {
        self.list(Some(filter), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(first: &str, last: &str, title: Option<&str>) -> CreateEmployeeDto {
        CreateEmployeeDto {
            last_name: last.to_string(),
            first_name: first.to_string(),
            title: title.map(str::to_string),
            city: None,
            country: None,
        }
    }

    #[tokio::test]
    async fn test_missing_title_is_reported_with_field_errors() {
        let dto = create_dto("Christopher", "Davolio", None);

        match EmployeeHooks.validate_for_create(&dto).await {
            BusinessValidation::Invalid { errors, .. } => assert_eq!(
                errors,
                vec![
                    "first_name: must be between 1 and 10 characters".to_string(),
                    "title: is required".to_string(),
                ]
            ),
            BusinessValidation::Valid => panic!("expected invalid"),
        }
    }

    #[tokio::test]
    async fn test_valid_employee() {
        let dto = create_dto("Nancy", "Davolio", Some("Sales Representative"));
        assert!(EmployeeHooks.validate_for_create(&dto).await.is_valid());
    }
}
