//! Supplier service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::storage::Storage;
use crate::domain::supplier::{
    CreateSupplierDto, Supplier, SupplierDto, SupplierFilter, SupplierId, UpdateSupplierDto,
};

use super::entity_service::{EntityService, ListParams};

pub const SUPPLIER_CACHE_PREFIX: &str = "supplier_list_";

pub type SupplierService = EntityService<SupplierMapper, SupplierHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierMapper;

impl EntityMapper for SupplierMapper {
    type Entity = Supplier;
    type Dto = SupplierDto;
    type CreateDto = CreateSupplierDto;
    type UpdateDto = UpdateSupplierDto;

    fn to_dto(&self, supplier: &Supplier) -> SupplierDto {
        SupplierDto {
            supplier_id: supplier.supplier_id.0,
            company_name: supplier.company_name.clone(),
            contact_name: supplier.contact_name.clone(),
            city: supplier.city.clone(),
            country: supplier.country.clone(),
            is_deleted: supplier.is_deleted,
        }
    }

    fn to_entity(&self, dto: CreateSupplierDto) -> Supplier {
        Supplier {
            supplier_id: SupplierId::default(),
            company_name: dto.company_name,
            contact_name: dto.contact_name,
            city: dto.city,
            country: dto.country,
            is_deleted: false,
        }
    }

    fn apply_update(&self, dto: &UpdateSupplierDto, supplier: &mut Supplier) {
        supplier.company_name = dto.company_name.clone();
        supplier.contact_name = dto.contact_name.clone();
        supplier.city = dto.city.clone();
        supplier.country = dto.country.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierHooks;

#[async_trait]
impl EntityHooks<SupplierMapper> for SupplierHooks {
    async fn validate_for_create(&self, dto: &CreateSupplierDto) -> BusinessValidation {
        BusinessValidation::check(dto)
    }

    async fn validate_for_update(
        &self,
        dto: &UpdateSupplierDto,
        existing: &Supplier,
    ) -> BusinessValidation {
        if existing.is_deleted {
            return BusinessValidation::rejected("Deleted suppliers cannot be updated");
        }

        BusinessValidation::check(dto)
    }

    fn key_from_update(&self, dto: &UpdateSupplierDto) -> SupplierId {
        SupplierId(dto.supplier_id)
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn soft_delete(&self, supplier: &mut Supplier) {
        supplier.is_deleted = true;
    }
}

impl EntityService<SupplierMapper, SupplierHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Supplier>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(
            storage,
            cache,
            SupplierMapper,
            SupplierHooks,
            SUPPLIER_CACHE_PREFIX,
            "Supplier",
        )
    }

    pub async fn list_suppliers(
        &self,
        filter: &SupplierFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<SupplierDto>> {
        self.list(Some(filter), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::MockCache;
    use crate::domain::storage::mock::MockStorage;

    #[tokio::test]
    async fn test_supplier_lifecycle() {
        let storage = Arc::new(MockStorage::new());
        let service = SupplierService::with_storage(storage.clone(), Arc::new(MockCache::new()));

        let created = service
            .add(CreateSupplierDto {
                company_name: "Exotic Liquids".to_string(),
                contact_name: Some("Charlotte Cooper".to_string()),
                city: Some("London".to_string()),
                country: Some("UK".to_string()),
            })
            .await;
        let id = SupplierId(created.data().unwrap().supplier_id);

        assert_eq!(service.delete(&id).await.status_code(), 204);

        let update = service
            .update(UpdateSupplierDto {
                supplier_id: id.0,
                company_name: "Exotic Liquids Ltd".to_string(),
                contact_name: None,
                city: None,
                country: None,
            })
            .await;
        assert_eq!(update.status_code(), 400);

        let deleted_only = service
            .list_suppliers(
                &SupplierFilter {
                    is_deleted: Some(true),
                    ..Default::default()
                },
                &ListParams::default(),
            )
            .await;
        assert_eq!(deleted_only.data().unwrap()[0].company_name, "Exotic Liquids");
    }

    #[tokio::test]
    async fn test_company_name_too_long() {
        let dto = CreateSupplierDto {
            company_name: "x".repeat(41),
            contact_name: None,
            city: None,
            country: None,
        };

        assert!(!SupplierHooks.validate_for_create(&dto).await.is_valid());
    }
}
