//! Supplier request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub supplier_id: i32,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSupplierDto {
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    pub company_name: String,
    #[validate(length(max = 30))]
    pub contact_name: Option<String>,
    #[validate(length(max = 15))]
    pub city: Option<String>,
    #[validate(length(max = 15))]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSupplierDto {
    pub supplier_id: i32,
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    pub company_name: String,
    #[validate(length(max = 30))]
    pub contact_name: Option<String>,
    #[validate(length(max = 15))]
    pub city: Option<String>,
    #[validate(length(max = 15))]
    pub country: Option<String>,
}
