//! Product request and response shapes

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub product_id: i32,
    pub product_name: String,
    pub supplier_id: Option<i32>,
    pub category_id: Option<i32>,
    pub quantity_per_unit: Option<String>,
    pub unit_price: Option<f64>,
    pub units_in_stock: Option<i16>,
    pub discontinued: bool,
}

/// Payload for creating a product
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductDto {
    #[validate(length(min = 3, max = 40, message = "must be between 3 and 40 characters"))]
    pub product_name: String,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub unit_price: Option<f64>,
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub units_in_stock: Option<i16>,
    #[validate(length(max = 20))]
    pub quantity_per_unit: Option<String>,
    #[validate(range(min = 1, message = "must reference an existing category"))]
    pub category_id: i32,
    #[validate(range(min = 1, message = "must reference an existing supplier"))]
    pub supplier_id: i32,
}

/// Payload for updating a product; the key travels in the body
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductDto {
    pub product_id: i32,
    #[validate(length(min = 3, max = 40, message = "must be between 3 and 40 characters"))]
    pub product_name: String,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub unit_price: Option<f64>,
    #[validate(range(min = 0, message = "cannot be negative"))]
    pub units_in_stock: Option<i16>,
    #[validate(length(max = 20))]
    pub quantity_per_unit: Option<String>,
    #[validate(range(min = 1, message = "must reference an existing category"))]
    pub category_id: i32,
    #[validate(range(min = 1, message = "must reference an existing supplier"))]
    pub supplier_id: i32,
}
