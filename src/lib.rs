//! Northwind Catalog API
//!
//! Cached CRUD services over the Northwind sample schema:
//! - Generic entity service with filtering, sorting and pagination
//! - Read-through response cache with prefix invalidation on writes
//! - Soft or hard delete per entity type
//! - Pluggable business-rule hooks per entity type

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use api::state::AppState;
use domain::{
    Cache, category::Category, customer::Customer, employee::Employee, order::Order,
    product::Product, supplier::Supplier,
};
use infrastructure::{
    cache::InMemoryCache,
    services::{
        CategoryService, CustomerService, EmployeeService, OrderService, ProductService,
        SupplierService,
    },
    storage::InMemoryStorage,
};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let cache: Arc<dyn Cache> = Arc::new(InMemoryCache::with_config(config.cache.to_cache_config()));
    let page_size = config.pagination.default_page_size;

    let seed = config.seed_sample_data;
    info!(seed_sample_data = seed, "Using in-memory storage for entities");

    let order_rows = if seed { default_orders()? } else { Vec::new() };

    let products = Arc::new(
        ProductService::with_storage(
            Arc::new(InMemoryStorage::with_entities(seeded(seed, default_products))),
            cache.clone(),
        )
        .with_default_page_size(page_size),
    );
    let categories = Arc::new(
        CategoryService::with_storage(
            Arc::new(InMemoryStorage::with_entities(seeded(seed, default_categories))),
            cache.clone(),
        )
        .with_default_page_size(page_size),
    );
    let customers = Arc::new(
        CustomerService::with_storage(
            Arc::new(InMemoryStorage::with_entities(seeded(seed, default_customers))),
            cache.clone(),
        )
        .with_default_page_size(page_size),
    );
    let employees = Arc::new(
        EmployeeService::with_storage(
            Arc::new(InMemoryStorage::with_entities(seeded(seed, default_employees))),
            cache.clone(),
        )
        .with_default_page_size(page_size),
    );
    let orders = Arc::new(
        OrderService::with_storage(
            Arc::new(InMemoryStorage::with_entities(order_rows)),
            cache.clone(),
        )
        .with_default_page_size(page_size),
    );
    let suppliers = Arc::new(
        SupplierService::with_storage(
            Arc::new(InMemoryStorage::with_entities(seeded(seed, default_suppliers))),
            cache,
        )
        .with_default_page_size(page_size),
    );

    Ok(AppState {
        products,
        categories,
        customers,
        employees,
        orders,
        suppliers,
    })
}

fn seeded<T: Default>(enabled: bool, rows: impl FnOnce() -> T) -> T {
    if enabled { rows() } else { T::default() }
}

fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Beverages")
            .with_id(1)
            .with_description("Soft drinks, coffees, teas, beers, and ales"),
        Category::new("Condiments")
            .with_id(2)
            .with_description("Sweet and savory sauces, relishes, spreads, and seasonings"),
        Category::new("Confections")
            .with_id(3)
            .with_description("Desserts, candies, and sweet breads"),
        Category::new("Dairy Products").with_id(4).with_description("Cheeses"),
        Category::new("Grains/Cereals")
            .with_id(5)
            .with_description("Breads, crackers, pasta, and cereal"),
        Category::new("Meat/Poultry").with_id(6).with_description("Prepared meats"),
        Category::new("Produce").with_id(7).with_description("Dried fruit and bean curd"),
        Category::new("Seafood").with_id(8).with_description("Seaweed and fish"),
    ]
}

fn default_suppliers() -> Vec<Supplier> {
    vec![
        Supplier::new("Exotic Liquids")
            .with_id(1)
            .with_contact("Charlotte Cooper")
            .located_in("London", "UK"),
        Supplier::new("New Orleans Cajun Delights")
            .with_id(2)
            .with_contact("Shelley Burke")
            .located_in("New Orleans", "USA"),
        Supplier::new("Grandma Kelly's Homestead")
            .with_id(3)
            .with_contact("Regina Murphy")
            .located_in("Ann Arbor", "USA"),
    ]
}

fn default_products() -> Vec<Product> {
    vec![
        Product::new("Chai")
            .with_id(1)
            .with_supplier(1)
            .with_category(1)
            .with_quantity_per_unit("10 boxes x 20 bags")
            .with_unit_price(18.0)
            .with_units_in_stock(39),
        Product::new("Chang")
            .with_id(2)
            .with_supplier(1)
            .with_category(1)
            .with_quantity_per_unit("24 - 12 oz bottles")
            .with_unit_price(19.0)
            .with_units_in_stock(17),
        Product::new("Aniseed Syrup")
            .with_id(3)
            .with_supplier(1)
            .with_category(2)
            .with_quantity_per_unit("12 - 550 ml bottles")
            .with_unit_price(10.0)
            .with_units_in_stock(13),
        Product::new("Chef Anton's Cajun Seasoning")
            .with_id(4)
            .with_supplier(2)
            .with_category(2)
            .with_quantity_per_unit("48 - 6 oz jars")
            .with_unit_price(22.0)
            .with_units_in_stock(53),
        Product::new("Chef Anton's Gumbo Mix")
            .with_id(5)
            .with_supplier(2)
            .with_category(2)
            .with_quantity_per_unit("36 boxes")
            .with_unit_price(21.35)
            .with_units_in_stock(0)
            .discontinued(),
        Product::new("Grandma's Boysenberry Spread")
            .with_id(6)
            .with_supplier(3)
            .with_category(2)
            .with_quantity_per_unit("12 - 8 oz jars")
            .with_unit_price(25.0)
            .with_units_in_stock(120),
    ]
}

fn default_customers() -> Vec<Customer> {
    vec![
        Customer::new("ALFKI", "Alfreds Futterkiste")
            .with_contact("Maria Anders")
            .located_in("Berlin", "Germany"),
        Customer::new("ANATR", "Ana Trujillo Emparedados y helados")
            .with_contact("Ana Trujillo")
            .located_in("México D.F.", "Mexico"),
        Customer::new("ANTON", "Antonio Moreno Taquería")
            .with_contact("Antonio Moreno")
            .located_in("México D.F.", "Mexico"),
        Customer::new("VINET", "Vins et alcools Chevalier")
            .with_contact("Paul Henriot")
            .located_in("Reims", "France"),
    ]
}

fn default_employees() -> Vec<Employee> {
    vec![
        Employee::new("Nancy", "Davolio")
            .with_id(1)
            .with_title("Sales Representative")
            .located_in("Seattle", "USA"),
        Employee::new("Andrew", "Fuller")
            .with_id(2)
            .with_title("Vice President, Sales")
            .located_in("Tacoma", "USA"),
        Employee::new("Janet", "Leverling")
            .with_id(3)
            .with_title("Sales Representative")
            .located_in("Kirkland", "USA"),
        Employee::new("Steven", "Buchanan")
            .with_id(5)
            .with_title("Sales Manager")
            .located_in("London", "UK"),
    ]
}

fn default_orders() -> anyhow::Result<Vec<Order>> {
    let date = |y, m, d| {
        NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| anyhow::anyhow!("Invalid sample order date {}-{}-{}", y, m, d))
    };

    Ok(vec![
        Order::new("VINET", 5)
            .with_id(10248)
            .placed_on(date(1996, 7, 4)?)
            .with_freight(32.38)
            .shipped_to("France"),
        Order::new("ALFKI", 3)
            .with_id(10249)
            .placed_on(date(1996, 7, 5)?)
            .with_freight(11.61)
            .shipped_to("Germany"),
        Order::new("ANTON", 1)
            .with_id(10250)
            .placed_on(date(1996, 7, 8)?)
            .with_freight(65.83)
            .shipped_to("Mexico"),
    ])
}
