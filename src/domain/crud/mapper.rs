//! Entity mapping and business-rule hooks

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::domain::storage::StorageEntity;

use super::validation::BusinessValidation;

/// Translates between a stored entity and its API shapes
pub trait EntityMapper: Send + Sync + 'static {
    type Entity: StorageEntity;
    type Dto: Clone + Send + Sync + Serialize + DeserializeOwned + 'static;
    type CreateDto: Send + Sync + 'static;
    type UpdateDto: Send + Sync + 'static;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto;

    /// Builds a new entity; the key may be left unassigned for the store to fill
    fn to_entity(&self, dto: Self::CreateDto) -> Self::Entity;

    /// Copies update fields onto an existing entity
    fn apply_update(&self, dto: &Self::UpdateDto, entity: &mut Self::Entity);
}

type KeyOf<M> = <<M as EntityMapper>::Entity as StorageEntity>::Key;

/// Per-entity business rules plugged into the generic service
#[async_trait]
pub trait EntityHooks<M: EntityMapper>: Send + Sync + 'static {
    async fn validate_for_create(&self, dto: &M::CreateDto) -> BusinessValidation;

    async fn validate_for_update(
        &self,
        dto: &M::UpdateDto,
        existing: &M::Entity,
    ) -> BusinessValidation;

    fn key_from_update(&self, dto: &M::UpdateDto) -> KeyOf<M>;

    fn supports_soft_delete(&self) -> bool {
        false
    }

    /// Marks the entity inactive; only called when soft delete is supported
    fn soft_delete(&self, _entity: &mut M::Entity) {}
}
