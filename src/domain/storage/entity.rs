//! Storage entity traits and types

use std::fmt::{Debug, Display};
use std::hash::Hash;

use serde::{Serialize, de::DeserializeOwned};

use super::query::SortValue;

/// Trait for types that can be used as storage keys
pub trait StorageKey:
    Clone + Debug + Display + Send + Sync + Eq + Ord + Hash + 'static
{
    /// Builds a key from a store-assigned sequence number
    ///
    /// Returns `None` for key types the caller must supply (e.g. customer codes).
    fn from_sequence(_sequence: u64) -> Option<Self> {
        None
    }

    /// Sequence number carried by this key, if it is a generated key
    fn sequence(&self) -> Option<u64> {
        None
    }

    /// True while the store still has to assign the key
    fn is_unassigned(&self) -> bool;
}

/// Trait for types that can be stored
pub trait StorageEntity:
    Clone + Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// The key type for this entity
    type Key: StorageKey;

    /// Returns the entity's key
    fn key(&self) -> &Self::Key;

    /// Replaces the entity's key (used when the store assigns one)
    fn set_key(&mut self, key: Self::Key);

    /// Value of a sortable column
    ///
    /// `field` arrives normalized: lowercase with underscores removed, so
    /// `unit_price`, `UnitPrice` and `unitPrice` all map to `unitprice`.
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

macro_rules! integer_storage_key {
    ($name:ident) => {
        impl $crate::domain::storage::StorageKey for $name {
            fn from_sequence(sequence: u64) -> Option<Self> {
                i32::try_from(sequence).ok().map($name)
            }

            fn sequence(&self) -> Option<u64> {
                u64::try_from(self.0).ok()
            }

            fn is_unassigned(&self) -> bool {
                self.0 <= 0
            }
        }
    };
}

pub(crate) use integer_storage_key;
