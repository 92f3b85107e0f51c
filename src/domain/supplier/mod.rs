//! Supplier domain

mod dto;
mod entity;
mod filter;

pub use dto::{CreateSupplierDto, SupplierDto, UpdateSupplierDto};
pub use entity::{Supplier, SupplierId};
pub use filter::SupplierFilter;
