//! Customer service - customer codes are chosen by the caller

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::customer::{
    CreateCustomerDto, Customer, CustomerDto, CustomerFilter, CustomerId, UpdateCustomerDto,
};
use crate::domain::storage::Storage;

use super::entity_service::{EntityService, ListParams};

pub const CUSTOMER_CACHE_PREFIX: &str = "customer_list_";

pub type CustomerService = EntityService<CustomerMapper, CustomerHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerMapper;

impl EntityMapper for CustomerMapper {
    type Entity = Customer;
    type Dto = CustomerDto;
    type CreateDto = CreateCustomerDto;
    type UpdateDto = UpdateCustomerDto;

    fn to_dto(&self, customer: &Customer) -> CustomerDto {
        CustomerDto {
            customer_id: customer.customer_id.to_string(),
            company_name: customer.company_name.clone(),
            contact_name: customer.contact_name.clone(),
            city: customer.city.clone(),
            country: customer.country.clone(),
            is_deleted: customer.is_deleted,
        }
    }

    fn to_entity(&self, dto: CreateCustomerDto) -> Customer {
        Customer {
            customer_id: CustomerId::new(dto.customer_id.trim().to_uppercase()),
            company_name: dto.company_name,
            contact_name: dto.contact_name,
            city: dto.city,
            country: dto.country,
            is_deleted: false,
        }
    }

    fn apply_update(&self, dto: &UpdateCustomerDto, customer: &mut Customer) {
        customer.company_name = dto.company_name.clone();
        customer.contact_name = dto.contact_name.clone();
        customer.city = dto.city.clone();
        customer.country = dto.country.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CustomerHooks;

#[async_trait]
impl EntityHooks<CustomerMapper> for CustomerHooks {
    async fn validate_for_create(&self, dto: &CreateCustomerDto) -> BusinessValidation {
        if dto.customer_id.trim().is_empty() {
            return BusinessValidation::rejected("Customer id is required");
        }

        BusinessValidation::check(dto)
    }

    async fn validate_for_update(
        &self,
        dto: &UpdateCustomerDto,
        existing: &Customer,
    ) -> BusinessValidation {
        if existing.is_deleted {
            return BusinessValidation::rejected("Deleted customers cannot be updated");
        }

        BusinessValidation::check(dto)
    }

    fn key_from_update(&self, dto: &UpdateCustomerDto) -> CustomerId {
        CustomerId::new(dto.customer_id.trim().to_uppercase())
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn soft_delete(&self, customer: &mut Customer) {
        customer.is_deleted = true;
    }
}

impl EntityService<CustomerMapper, CustomerHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Customer>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(
            storage,
            cache,
            CustomerMapper,
            CustomerHooks,
            CUSTOMER_CACHE_PREFIX,
            "Customer",
        )
    }

    pub async fn list_customers(
        &self,
        filter: &CustomerFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<CustomerDto>> {
        self.list(Some(filter), params).await
    }
}
