//! Category domain

mod dto;
mod entity;
mod filter;

pub use dto::{CategoryDto, CreateCategoryDto, UpdateCategoryDto};
pub use entity::{Category, CategoryId};
pub use filter::CategoryFilter;
