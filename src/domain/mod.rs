//! Domain layer - Core business logic and entities

pub mod cache;
pub mod category;
pub mod crud;
pub mod customer;
pub mod employee;
pub mod error;
pub mod order;
pub mod product;
pub mod storage;
pub mod supplier;

pub use cache::{Cache, CacheExt, CacheKeyParams, EntityCacheKeys};
pub use crud::{BusinessValidation, EntityHooks, EntityMapper, Pagination, ServiceResponse};
pub use error::DomainError;
pub use storage::{EntityFilter, PageSpec, SortDirection, SortSpec, Storage, StorageEntity, StorageKey};
