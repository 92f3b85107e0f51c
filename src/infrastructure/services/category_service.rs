//! Category service

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::category::{
    Category, CategoryDto, CategoryFilter, CategoryId, CreateCategoryDto, UpdateCategoryDto,
};
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::storage::Storage;

use super::entity_service::{EntityService, ListParams};

pub const CATEGORY_CACHE_PREFIX: &str = "category_list_";

pub type CategoryService = EntityService<CategoryMapper, CategoryHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryMapper;

impl EntityMapper for CategoryMapper {
    type Entity = Category;
    type Dto = CategoryDto;
    type CreateDto = CreateCategoryDto;
    type UpdateDto = UpdateCategoryDto;

    fn to_dto(&self, category: &Category) -> CategoryDto {
        CategoryDto {
            category_id: category.category_id.0,
            category_name: category.category_name.clone(),
            description: category.description.clone(),
            is_deleted: category.is_deleted,
        }
    }

    fn to_entity(&self, dto: CreateCategoryDto) -> Category {
        Category {
            category_id: CategoryId::default(),
            category_name: dto.category_name.trim().to_string(),
            description: dto.description,
            is_deleted: false,
        }
    }

    fn apply_update(&self, dto: &UpdateCategoryDto, category: &mut Category) {
        category.category_name = dto.category_name.trim().to_string();
        category.description = dto.description.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryHooks;

#[async_trait]
impl EntityHooks<CategoryMapper> for CategoryHooks {
    async fn validate_for_create(&self, dto: &CreateCategoryDto) -> BusinessValidation {
        if dto.category_name.trim().is_empty() {
            return BusinessValidation::rejected("Category name is required");
        }

        BusinessValidation::check(dto)
    }

    async fn validate_for_update(
        &self,
        dto: &UpdateCategoryDto,
        existing: &Category,
    ) -> BusinessValidation {
        if existing.is_deleted {
            return BusinessValidation::rejected("Deleted categories cannot be updated");
        }

        if dto.category_name.trim().is_empty() {
            return BusinessValidation::rejected("Category name is required");
        }

        BusinessValidation::check(dto)
    }

    fn key_from_update(&self, dto: &UpdateCategoryDto) -> CategoryId {
        CategoryId(dto.category_id)
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn soft_delete(&self, category: &mut Category) {
        category.is_deleted = true;
    }
}

impl EntityService<CategoryMapper, CategoryHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Category>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(
            storage,
            cache,
            CategoryMapper,
            CategoryHooks,
            CATEGORY_CACHE_PREFIX,
            "Category",
        )
    }

    pub async fn list_categories(
        &self,
        filter: &CategoryFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<CategoryDto>> {
        self.list(Some(filter), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_category_name_length() {
        let dto = CreateCategoryDto {
            category_name: "Beverages and other drinks".to_string(),
            description: None,
        };

        match CategoryHooks.validate_for_create(&dto).await {
            BusinessValidation::Invalid { errors, .. } => assert_eq!(
                errors,
                vec!["category_name: cannot exceed 15 characters".to_string()]
            ),
            BusinessValidation::Valid => panic!("expected invalid"),
        }
    }

    #[tokio::test]
    async fn test_deleted_category_rejects_update() {
        let dto = UpdateCategoryDto {
            category_id: 2,
            category_name: "Sauces".to_string(),
            description: None,
        };
        let existing = Category::new("Condiments").with_id(2).deleted();

        assert!(!CategoryHooks.validate_for_update(&dto, &existing).await.is_valid());
        assert!(CategoryHooks
            .validate_for_update(&dto, &Category::new("Condiments").with_id(2))
            .await
            .is_valid());
    }

    #[test]
    fn test_mapper_trims_name() {
        let category = CategoryMapper.to_entity(CreateCategoryDto {
            category_name: "  Produce ".to_string(),
            description: Some("Dried fruit".to_string()),
        });

        assert_eq!(category.category_name, "Produce");
        assert!(!category.is_deleted);
    }
}
