//! Product service - products are discontinued rather than removed

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::product::{
    CreateProductDto, Product, ProductDto, ProductFilter, ProductId, UpdateProductDto,
};
use crate::domain::storage::Storage;

use super::entity_service::{EntityService, ListParams};

pub const PRODUCT_CACHE_PREFIX: &str = "product_list_";

pub type ProductService = EntityService<ProductMapper, ProductHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductMapper;

impl EntityMapper for ProductMapper {
    type Entity = Product;
    type Dto = ProductDto;
    type CreateDto = CreateProductDto;
    type UpdateDto = UpdateProductDto;

    fn to_dto(&self, product: &Product) -> ProductDto {
        ProductDto {
            product_id: product.product_id.0,
            product_name: product.product_name.clone(),
            supplier_id: product.supplier_id,
            category_id: product.category_id,
            quantity_per_unit: product.quantity_per_unit.clone(),
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            discontinued: product.discontinued,
        }
    }

    fn to_entity(&self, dto: CreateProductDto) -> Product {
        Product {
            product_id: ProductId::default(),
            product_name: dto.product_name.trim().to_string(),
            supplier_id: Some(dto.supplier_id),
            category_id: Some(dto.category_id),
            quantity_per_unit: dto.quantity_per_unit,
            unit_price: dto.unit_price,
            units_in_stock: dto.units_in_stock,
            discontinued: false,
        }
    }

    fn apply_update(&self, dto: &UpdateProductDto, product: &mut Product) {
        product.product_name = dto.product_name.trim().to_string();
        product.supplier_id = Some(dto.supplier_id);
        product.category_id = Some(dto.category_id);
        product.quantity_per_unit = dto.quantity_per_unit.clone();
        product.unit_price = dto.unit_price;
        product.units_in_stock = dto.units_in_stock;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProductHooks;

fn require_name(name: &str) -> BusinessValidation {
    if name.trim().is_empty() {
        BusinessValidation::rejected("Product name is required")
    } else {
        BusinessValidation::Valid
    }
}

#[async_trait]
impl EntityHooks<ProductMapper> for ProductHooks {
    async fn validate_for_create(&self, dto: &CreateProductDto) -> BusinessValidation {
        match require_name(&dto.product_name) {
            BusinessValidation::Valid => BusinessValidation::check(dto),
            invalid => invalid,
        }
    }

    async fn validate_for_update(
        &self,
        dto: &UpdateProductDto,
        existing: &Product,
    ) -> BusinessValidation {
        if existing.discontinued {
            return BusinessValidation::rejected("Discontinued products cannot be updated");
        }

        match require_name(&dto.product_name) {
            BusinessValidation::Valid => BusinessValidation::check(dto),
            invalid => invalid,
        }
    }

    fn key_from_update(&self, dto: &UpdateProductDto) -> ProductId {
        ProductId(dto.product_id)
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn soft_delete(&self, product: &mut Product) {
        product.discontinued = true;
    }
}

impl EntityService<ProductMapper, ProductHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Product>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(
            storage,
            cache,
            ProductMapper,
            ProductHooks,
            PRODUCT_CACHE_PREFIX,
            "Product",
        )
    }

    pub async fn list_products(
        &self,
        filter: &ProductFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<ProductDto>> {
        self.list(Some(filter), params).await
    }
}
