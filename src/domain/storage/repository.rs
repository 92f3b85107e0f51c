//! Storage trait definition

use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::entity::{StorageEntity, StorageKey};
use super::query::{EntityFilter, PageSpec, SortSpec};

/// Storage port for one entity type
///
/// Reads hit committed state. `insert`, `update` and `delete` only stage a
/// change into the caller's [`ChangeSet`]; nothing is visible to readers until
/// that change set is committed.
#[async_trait]
pub trait Storage<E>: Send + Sync + Debug
where
    E: StorageEntity,
{
    /// Retrieves the filtered, sorted page of entities
    async fn list(
        &self,
        filter: Option<&dyn EntityFilter<E>>,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> Result<Vec<E>, DomainError>;

    /// Counts entities matching the filter
    async fn count(&self, filter: Option<&dyn EntityFilter<E>>) -> Result<u64, DomainError>;

    /// Retrieves an entity by its key
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError>;

    /// Checks if an entity exists by its key
    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        Ok(self.get(key).await?.is_some())
    }

    /// Stages an insert, returning the entity with its key assigned
    async fn insert(&self, changes: &mut ChangeSet<E>, entity: E) -> Result<E, DomainError>;

    /// Stages an update of an existing entity
    async fn update(&self, changes: &mut ChangeSet<E>, entity: E) -> Result<(), DomainError>;

    /// Stages removal of an entity
    async fn delete(&self, changes: &mut ChangeSet<E>, key: &E::Key) -> Result<(), DomainError>;

    /// Persists one change set, returns the number of changes applied
    ///
    /// Either every change in the set is applied or none is. Changes staged
    /// into other sets are never touched.
    async fn commit(&self, changes: ChangeSet<E>) -> Result<usize, DomainError>;
}

/// A change waiting for `commit`
#[derive(Debug, Clone)]
pub enum StagedChange<E: StorageEntity> {
    Insert(E),
    Update(E),
    Delete(E::Key),
}

/// Changes staged by one caller
#[derive(Debug, Clone)]
pub struct ChangeSet<E: StorageEntity> {
    changes: Vec<StagedChange<E>>,
}

impl<E: StorageEntity> Default for ChangeSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: StorageEntity> ChangeSet<E> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    pub fn stage(&mut self, change: StagedChange<E>) {
        self.changes.push(change);
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn into_changes(self) -> Vec<StagedChange<E>> {
        self.changes
    }
}

/// Applies staged changes to a copy of `rows`, swapping it in only if all succeed
pub fn apply_staged<E: StorageEntity>(
    rows: &mut BTreeMap<E::Key, E>,
    changes: Vec<StagedChange<E>>,
) -> Result<usize, DomainError> {
    let mut next = rows.clone();
    let applied = changes.len();

    for change in changes {
        match change {
            StagedChange::Insert(entity) => {
                let key = entity.key().clone();

                if next.contains_key(&key) {
                    return Err(DomainError::conflict(format!(
                        "Entity with key '{}' already exists",
                        key
                    )));
                }

                next.insert(key, entity);
            }
            StagedChange::Update(entity) => {
                let key = entity.key().clone();

                match next.get_mut(&key) {
                    Some(slot) => *slot = entity,
                    None => {
                        return Err(DomainError::not_found(format!(
                            "Entity with key '{}' not found",
                            key
                        )));
                    }
                }
            }
            StagedChange::Delete(key) => {
                if next.remove(&key).is_none() {
                    return Err(DomainError::not_found(format!(
                        "Entity with key '{}' not found",
                        key
                    )));
                }
            }
        }
    }

    *rows = next;
    Ok(applied)
}

/// Assigns a generated key when the entity does not carry one yet
pub fn assign_key<E: StorageEntity>(
    mut entity: E,
    next_sequence: impl FnOnce() -> u64,
) -> Result<E, DomainError> {
    if entity.key().is_unassigned() {
        let key = E::Key::from_sequence(next_sequence()).ok_or_else(|| {
            DomainError::validation("A key must be supplied for this entity type")
        })?;
        entity.set_key(key);
    }

    Ok(entity)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::query::SortValue;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    struct TestId(i32);

    impl std::fmt::Display for TestId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    crate::domain::storage::integer_storage_key!(TestId);

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestEntity {
        id: TestId,
        name: String,
    }

    impl StorageEntity for TestEntity {
        type Key = TestId;

        fn key(&self) -> &Self::Key {
            &self.id
        }

        fn set_key(&mut self, key: Self::Key) {
            self.id = key;
        }

        fn sort_value(&self, field: &str) -> Option<SortValue> {
            match field {
                "name" => Some(SortValue::Text(self.name.clone())),
                _ => None,
            }
        }
    }

    fn entity(id: i32, name: &str) -> TestEntity {
        TestEntity {
            id: TestId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_apply_staged_all_or_nothing() {
        let mut rows = BTreeMap::new();
        rows.insert(TestId(1), entity(1, "a"));

        let result = apply_staged(
            &mut rows,
            vec![
                StagedChange::Insert(entity(2, "b")),
                StagedChange::Insert(entity(1, "dup")),
            ],
        );

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&TestId(1)].name, "a");
    }

    #[test]
    fn test_apply_staged_update_and_delete() {
        let mut rows = BTreeMap::new();
        rows.insert(TestId(1), entity(1, "a"));
        rows.insert(TestId(2), entity(2, "b"));

        let applied = apply_staged(
            &mut rows,
            vec![
                StagedChange::Update(entity(1, "renamed")),
                StagedChange::Delete(TestId(2)),
            ],
        )
        .unwrap();

        assert_eq!(applied, 2);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[&TestId(1)].name, "renamed");
    }

    #[test]
    fn test_apply_staged_update_missing() {
        let mut rows: BTreeMap<TestId, TestEntity> = BTreeMap::new();

        let result = apply_staged(&mut rows, vec![StagedChange::Update(entity(9, "x"))]);
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_assign_key_only_when_unassigned() {
        let assigned = assign_key(entity(0, "new"), || 12).unwrap();
        assert_eq!(assigned.id, TestId(12));

        let kept = assign_key(entity(5, "existing"), || 12).unwrap();
        assert_eq!(kept.id, TestId(5));
    }

    #[tokio::test]
    async fn test_mock_storage_staging_is_invisible_until_commit() {
        use mock::MockStorage;

        let storage: MockStorage<TestEntity> = MockStorage::new().with_entity(entity(1, "a"));
        let mut changes = ChangeSet::new();
        let inserted = storage.insert(&mut changes, entity(0, "b")).await.unwrap();
        assert_eq!(inserted.id, TestId(2));
        assert_eq!(changes.len(), 1);

        assert!(storage.get(&TestId(2)).await.unwrap().is_none());
        storage.commit(changes).await.unwrap();
        assert!(storage.get(&TestId(2)).await.unwrap().is_some());
        assert_eq!(storage.insert_count(), 1);
        assert_eq!(storage.commit_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_storage_commits_only_its_own_change_set() {
        use mock::MockStorage;

        let storage: MockStorage<TestEntity> = MockStorage::new().with_entity(entity(1, "a"));

        let mut duplicate = ChangeSet::new();
        storage.insert(&mut duplicate, entity(1, "dup")).await.unwrap();

        let mut changes = ChangeSet::new();
        storage.insert(&mut changes, entity(0, "b")).await.unwrap();
        assert_eq!(storage.commit(changes).await.unwrap(), 1);
        assert_eq!(storage.row(&TestId(2)).unwrap().name, "b");

        let result = storage.commit(duplicate).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(storage.row(&TestId(1)).unwrap().name, "a");
        assert_eq!(storage.row_count(), 2);
    }
}
