//! Customer request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub customer_id: String,
    pub company_name: String,
    pub contact_name: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerDto {
    #[validate(length(min = 1, max = 5, message = "must be between 1 and 5 characters"))]
    pub customer_id: String,
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    pub company_name: String,
    #[validate(length(max = 30, message = "cannot exceed 30 characters"))]
    pub contact_name: Option<String>,
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerDto {
    pub customer_id: String,
    #[validate(length(min = 1, max = 40, message = "must be between 1 and 40 characters"))]
    pub company_name: String,
    #[validate(length(max = 30, message = "cannot exceed 30 characters"))]
    pub contact_name: Option<String>,
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub city: Option<String>,
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub country: Option<String>,
}
