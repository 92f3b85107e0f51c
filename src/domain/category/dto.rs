//! Category request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub category_id: i32,
    pub category_name: String,
    pub description: Option<String>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategoryDto {
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub category_name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCategoryDto {
    pub category_id: i32,
    #[validate(length(max = 15, message = "cannot exceed 15 characters"))]
    pub category_name: String,
    pub description: Option<String>,
}
