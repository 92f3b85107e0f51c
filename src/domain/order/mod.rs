//! Order domain - Order headers, removed on delete

mod dto;
mod entity;
mod filter;

pub use dto::{CreateOrderDto, OrderDto, UpdateOrderDto};
pub use entity::{Order, OrderId};
pub use filter::OrderFilter;
