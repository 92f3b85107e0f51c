//! Employee domain

mod dto;
mod entity;
mod filter;

pub use dto::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto};
pub use entity::{Employee, EmployeeId};
pub use filter::EmployeeFilter;
