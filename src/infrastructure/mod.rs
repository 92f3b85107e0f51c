//! Infrastructure layer - Cache, storage and service implementations

pub mod cache;
pub mod logging;
pub mod services;
pub mod storage;
