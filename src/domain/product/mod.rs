//! Product domain - Catalog products with soft delete via `discontinued`

mod dto;
mod entity;
mod filter;

pub use dto::{CreateProductDto, ProductDto, UpdateProductDto};
pub use entity::{Product, ProductId};
pub use filter::ProductFilter;
