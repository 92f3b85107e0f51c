//! Infrastructure services

mod category_service;
mod customer_service;
mod employee_service;
mod entity_service;
mod order_service;
mod product_service;
mod supplier_service;

pub use category_service::{
    CATEGORY_CACHE_PREFIX, CategoryHooks, CategoryMapper, CategoryService,
};
pub use customer_service::{
    CUSTOMER_CACHE_PREFIX, CustomerHooks, CustomerMapper, CustomerService,
};
pub use employee_service::{
    EMPLOYEE_CACHE_PREFIX, EmployeeHooks, EmployeeMapper, EmployeeService,
};
pub use entity_service::{EntityService, ListParams};
pub use order_service::{ORDER_CACHE_PREFIX, OrderHooks, OrderMapper, OrderService};
pub use product_service::{PRODUCT_CACHE_PREFIX, ProductHooks, ProductMapper, ProductService};
pub use supplier_service::{
    SUPPLIER_CACHE_PREFIX, SupplierHooks, SupplierMapper, SupplierService,
};
