//! Order service - orders are removed on delete

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cache::Cache;
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, ServiceResponse};
use crate::domain::order::{CreateOrderDto, Order, OrderDto, OrderFilter, OrderId, UpdateOrderDto};
use crate::domain::storage::Storage;

use super::entity_service::{EntityService, ListParams};

pub const ORDER_CACHE_PREFIX: &str = "order_list_";

pub type OrderService = EntityService<OrderMapper, OrderHooks>;

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderMapper;

impl EntityMapper for OrderMapper {
    type Entity = Order;
    type Dto = OrderDto;
    type CreateDto = CreateOrderDto;
    type UpdateDto = UpdateOrderDto;

    fn to_dto(&self, order: &Order) -> OrderDto {
        OrderDto {
            order_id: order.order_id.0,
            customer_id: order.customer_id.clone(),
            employee_id: order.employee_id,
            order_date: order.order_date,
            required_date: order.required_date,
            shipped_date: order.shipped_date,
            freight: order.freight,
            ship_country: order.ship_country.clone(),
        }
    }

    fn to_entity(&self, dto: CreateOrderDto) -> Order {
        Order {
            order_id: OrderId::default(),
            customer_id: dto.customer_id.trim().to_uppercase(),
            employee_id: dto.employee_id,
            order_date: dto.order_date,
            required_date: dto.required_date,
            shipped_date: dto.shipped_date,
            freight: dto.freight,
            ship_country: dto.ship_country,
        }
    }

    fn apply_update(&self, dto: &UpdateOrderDto, order: &mut Order) {
        order.customer_id = dto.customer_id.trim().to_uppercase();
        order.employee_id = dto.employee_id;
        order.order_date = dto.order_date;
        order.required_date = dto.required_date;
        order.shipped_date = dto.shipped_date;
        order.freight = dto.freight;
        order.ship_country = dto.ship_country.clone();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OrderHooks;

fn require_customer(customer_id: &str) -> BusinessValidation {
    if customer_id.trim().is_empty() {
        BusinessValidation::rejected("Order customer is required")
    } else {
        BusinessValidation::Valid
    }
}

#[async_trait]
impl EntityHooks<OrderMapper> for OrderHooks {
    async fn validate_for_create(&self, dto: &CreateOrderDto) -> BusinessValidation {
        require_customer(&dto.customer_id).and(BusinessValidation::check(dto))
    }

    async fn validate_for_update(&self, dto: &UpdateOrderDto, _existing: &Order) -> BusinessValidation {
        require_customer(&dto.customer_id).and(BusinessValidation::check(dto))
    }

    fn key_from_update(&self, dto: &UpdateOrderDto) -> OrderId {
        OrderId(dto.order_id)
    }
}

impl EntityService<OrderMapper, OrderHooks> {
    pub fn with_storage(storage: Arc<dyn Storage<Order>>, cache: Arc<dyn Cache>) -> Self {
        EntityService::new(storage, cache, OrderMapper, OrderHooks, ORDER_CACHE_PREFIX, "Order")
    }

    pub async fn list_orders(
        &self,
        filter: &OrderFilter,
        params: &ListParams,
    ) -> ServiceResponse<Vec<OrderDto>> {
        self.list(Some(filter), params).await
    }
}
