//! Order list filter

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::domain::storage::{EntityFilter, equals, fingerprint_of, text_contains, within};

use super::entity::Order;

/// Order conditions; the date bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFilter {
    pub order_id: Option<i32>,
    pub customer_id: Option<String>,
    pub employee_id: Option<i32>,
    pub order_date_from: Option<NaiveDate>,
    pub order_date_to: Option<NaiveDate>,
}

impl EntityFilter<Order> for OrderFilter {
    fn matches(&self, order: &Order) -> bool {
        equals(&order.order_id.0, self.order_id.as_ref())
            && text_contains(Some(order.customer_id.as_str()), self.customer_id.as_deref())
            && equals(&order.employee_id, self.employee_id.as_ref())
            && within(
                order.order_date.as_ref(),
                self.order_date_from.as_ref(),
                self.order_date_to.as_ref(),
            )
    }

    fn fingerprint(&self) -> Result<String, DomainError> {
        fingerprint_of(self)
    }
}
