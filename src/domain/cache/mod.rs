//! Cache domain - Cache port and key construction

mod key;
mod repository;

pub use key::{CacheKeyParams, EntityCacheKeys};
pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
