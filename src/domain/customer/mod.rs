//! Customer domain - Customers keyed by caller-supplied codes

mod dto;
mod entity;
mod filter;

pub use dto::{CreateCustomerDto, CustomerDto, UpdateCustomerDto};
pub use entity::{Customer, CustomerId};
pub use filter::CustomerFilter;
