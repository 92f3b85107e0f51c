//! Order entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::storage::{SortValue, StorageEntity, integer_storage_key};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub i32);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

integer_storage_key!(OrderId);

/// Customer order header
///
/// Orders carry no deleted marker; deleting one removes the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_id: String,
    pub employee_id: i32,
    pub order_date: Option<NaiveDate>,
    pub required_date: Option<NaiveDate>,
    pub shipped_date: Option<NaiveDate>,
    pub freight: Option<f64>,
    pub ship_country: Option<String>,
}

impl Order {
    pub fn new(customer_id: impl Into<String>, employee_id: i32) -> Self {
        Self {
            order_id: OrderId::default(),
            customer_id: customer_id.into(),
            employee_id,
            order_date: None,
            required_date: None,
            shipped_date: None,
            freight: None,
            ship_country: None,
        }
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.order_id = OrderId(id);
        self
    }

    pub fn placed_on(mut self, date: NaiveDate) -> Self {
        self.order_date = Some(date);
        self
    }

    pub fn with_freight(mut self, freight: f64) -> Self {
        self.freight = Some(freight);
        self
    }

    pub fn shipped_to(mut self, country: impl Into<String>) -> Self {
        self.ship_country = Some(country.into());
        self
    }
}

impl StorageEntity for Order {
    type Key = OrderId;

    fn key(&self) -> &Self::Key {
        &self.order_id
    }

    fn set_key(&mut self, key: Self::Key) {
        self.order_id = key;
    }

    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "orderid" | "id" => Some(SortValue::Int(self.order_id.0.into())),
            "customerid" => Some(SortValue::Text(self.customer_id.clone())),
            "employeeid" => Some(SortValue::Int(self.employee_id.into())),
            "orderdate" => Some(self.order_date.into()),
            "requireddate" => Some(self.required_date.into()),
            "shippeddate" => Some(self.shipped_date.into()),
            "freight" => Some(self.freight.into()),
            "shipcountry" => Some(self.ship_country.as_deref().into()),
            _ => None,
        }
    }
}
