//! Application state for shared services

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::category::CategoryFilter;
use crate::domain::customer::CustomerFilter;
use crate::domain::employee::EmployeeFilter;
use crate::domain::order::OrderFilter;
use crate::domain::product::ProductFilter;
use crate::domain::supplier::SupplierFilter;
use crate::domain::{EntityFilter, EntityHooks, EntityMapper, StorageEntity, StorageKey};
use crate::infrastructure::services::{
    CategoryHooks, CategoryMapper, CategoryService, CustomerHooks, CustomerMapper,
    CustomerService, EmployeeHooks, EmployeeMapper, EmployeeService, EntityService, OrderHooks,
    OrderMapper, OrderService, ProductHooks, ProductMapper, ProductService, SupplierHooks,
    SupplierMapper, SupplierService,
};

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
    pub categories: Arc<CategoryService>,
    pub customers: Arc<CustomerService>,
    pub employees: Arc<EmployeeService>,
    pub orders: Arc<OrderService>,
    pub suppliers: Arc<SupplierService>,
}

/// An entity type exposed under `/api/{PATH}`
///
/// Ties the generic handlers to one service in [`AppState`] and to the
/// request shapes they extract.
pub trait CatalogResource: Send + Sync + 'static {
    const PATH: &'static str;

    type Key: StorageKey + DeserializeOwned;
    type Entity: StorageEntity<Key = Self::Key>;
    type Create: DeserializeOwned + Send + Sync + 'static;
    type Update: DeserializeOwned + Send + Sync + 'static;
    type Mapper: EntityMapper<Entity = Self::Entity, CreateDto = Self::Create, UpdateDto = Self::Update>;
    type Hooks: EntityHooks<Self::Mapper>;
    type Filter: EntityFilter<Self::Entity> + DeserializeOwned + 'static;

    fn service(state: &AppState) -> &EntityService<Self::Mapper, Self::Hooks>;
}

macro_rules! catalog_resource {
    ($marker:ident, $path:literal, $field:ident, $mapper:ty, $hooks:ty, $filter:ty) => {
        pub struct $marker;

        impl CatalogResource for $marker {
            const PATH: &'static str = $path;

            type Key = <<$mapper as EntityMapper>::Entity as StorageEntity>::Key;
            type Entity = <$mapper as EntityMapper>::Entity;
            type Create = <$mapper as EntityMapper>::CreateDto;
            type Update = <$mapper as EntityMapper>::UpdateDto;
            type Mapper = $mapper;
            type Hooks = $hooks;
            type Filter = $filter;

            fn service(state: &AppState) -> &EntityService<Self::Mapper, Self::Hooks> {
                &state.$field
            }
        }
    };
}

catalog_resource!(Products, "products", products, ProductMapper, ProductHooks, ProductFilter);
catalog_resource!(Categories, "categories", categories, CategoryMapper, CategoryHooks, CategoryFilter);
catalog_resource!(Customers, "customers", customers, CustomerMapper, CustomerHooks, CustomerFilter);
catalog_resource!(Employees, "employees", employees, EmployeeMapper, EmployeeHooks, EmployeeFilter);
catalog_resource!(Orders, "orders", orders, OrderMapper, OrderHooks, OrderFilter);
catalog_resource!(Suppliers, "suppliers", suppliers, SupplierMapper, SupplierHooks, SupplierFilter);
