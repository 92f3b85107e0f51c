//! API layer - HTTP endpoints

pub mod catalog;
pub mod health;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
