//! Order request and response shapes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    pub order_id: i32,
    pub customer_id: String,
    pub employee_id: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    pub freight: Option<f64>,
    pub ship_country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderDto {
    #[validate(length(max = 5, message = "cannot exceed 5 characters"))]
    pub customer_id: String,
    #[validate(range(min = 1, message = "must reference an existing employee"))]
    pub employee_id: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub freight: Option<f64>,
    #[validate(length(max = 15))]
    pub ship_country: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderDto {
    pub order_id: i32,
    #[validate(length(max = 5, message = "cannot exceed 5 characters"))]
    pub customer_id: String,
    #[validate(range(min = 1, message = "must reference an existing employee"))]
    pub employee_id: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    #[validate(range(min = 0.0, message = "cannot be negative"))]
    pub freight: Option<f64>,
    #[validate(length(max = 15))]
    pub ship_country: Option<String>,
}
