//! CRUD domain - Outcome type, validation result and entity plug-in traits

mod mapper;
mod response;
mod validation;

pub use mapper::{EntityHooks, EntityMapper};
pub use response::{Pagination, ServiceResponse};
pub use validation::BusinessValidation;
