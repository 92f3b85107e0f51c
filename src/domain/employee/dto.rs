//! Employee request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub employee_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub title: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployeeDto {
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 15))]
    pub city: Option<String>,
    #[validate(length(max = 15))]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEmployeeDto {
    pub employee_id: i32,
    #[validate(length(min = 1, max = 20, message = "must be between 1 and 20 characters"))]
    pub last_name: String,
    #[validate(length(min = 1, max = 10, message = "must be between 1 and 10 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 30, message = "must be between 1 and 30 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 15))]
    pub city: Option<String>,
    #[validate(length(max = 15))]
    pub country: Option<String>,
}
