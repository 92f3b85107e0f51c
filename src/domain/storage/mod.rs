//! Storage domain - Generic storage port with filter, sort and paging

mod entity;
mod query;
mod repository;

pub(crate) use entity::integer_storage_key;
pub use entity::{StorageEntity, StorageKey};
pub use query::{
    DEFAULT_PAGE_SIZE, EntityFilter, PageSpec, SortDirection, SortSpec, SortValue,
    count_matching, equals, fingerprint_of, normalize_field_name, select, serialize_float_bound,
    text_contains, within,
};
pub use repository::{ChangeSet, StagedChange, Storage, apply_staged, assign_key};

#[cfg(test)]
pub use repository::mock;
