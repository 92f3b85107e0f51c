//! In-memory storage implementation

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{
    ChangeSet, EntityFilter, PageSpec, SortSpec, StagedChange, Storage, StorageEntity,
    StorageKey, apply_staged, assign_key, count_matching, select,
};
use crate::domain::DomainError;

/// Thread-safe in-memory storage implementation
///
/// Writes are staged into the caller's change set and only become visible when
/// that set is committed. Data is lost when the process terminates.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    entities: RwLock<BTreeMap<E::Key, E>>,
    sequence: AtomicU64,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
            sequence: AtomicU64::new(0),
        }
    }

    /// Creates storage pre-populated with entities
    ///
    /// Generated keys continue after the highest seeded key.
    pub fn with_entities(entities: Vec<E>) -> Self {
        let mut map = BTreeMap::new();
        let mut max_sequence = 0;

        for entity in entities {
            if let Some(seq) = entity.key().sequence() {
                max_sequence = max_sequence.max(seq);
            }
            map.insert(entity.key().clone(), entity);
        }

        Self {
            entities: RwLock::new(map),
            sequence: AtomicU64::new(max_sequence),
        }
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity,
{
    async fn list(
        &self,
        filter: Option<&dyn EntityFilter<E>>,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> Result<Vec<E>, DomainError> {
        let entities = self.entities.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(select(entities.values(), filter, sort, page))
    }

    async fn count(&self, filter: Option<&dyn EntityFilter<E>>) -> Result<u64, DomainError> {
        let entities = self.entities.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(count_matching(entities.values(), filter))
    }

    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let entities = self.entities.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entities.get(key).cloned())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let entities = self.entities.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(entities.contains_key(key))
    }

    async fn insert(&self, changes: &mut ChangeSet<E>, entity: E) -> Result<E, DomainError> {
        let entity = assign_key(entity, || self.sequence.fetch_add(1, Ordering::SeqCst) + 1)?;
        changes.stage(StagedChange::Insert(entity.clone()));
        Ok(entity)
    }

    async fn update(&self, changes: &mut ChangeSet<E>, entity: E) -> Result<(), DomainError> {
        changes.stage(StagedChange::Update(entity));
        Ok(())
    }

    async fn delete(&self, changes: &mut ChangeSet<E>, key: &E::Key) -> Result<(), DomainError> {
        changes.stage(StagedChange::Delete(key.clone()));
        Ok(())
    }

    async fn commit(&self, changes: ChangeSet<E>) -> Result<usize, DomainError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut entities = self.entities.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        apply_staged(&mut entities, changes.into_changes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Category, CategoryFilter, CategoryId};
    use crate::domain::customer::{Customer, CustomerId};
    use crate::domain::storage::SortDirection;

    fn seeded() -> InMemoryStorage<Category> {
        InMemoryStorage::with_entities(vec![
            Category::new("Beverages").with_id(1),
            Category::new("Condiments").with_id(2).deleted(),
            Category::new("Confections").with_id(3),
        ])
    }

    #[tokio::test]
    async fn test_insert_is_staged_until_commit() {
        let storage = seeded();

        let mut changes = ChangeSet::new();
        let inserted = storage.insert(&mut changes, Category::new("Dairy")).await.unwrap();
        assert_eq!(inserted.category_id, CategoryId(4));
        assert!(storage.get(&CategoryId(4)).await.unwrap().is_none());
        assert_eq!(changes.len(), 1);

        assert_eq!(storage.commit(changes).await.unwrap(), 1);
        assert!(storage.exists(&CategoryId(4)).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let storage = seeded();

        let mut beverages = storage.get(&CategoryId(1)).await.unwrap().unwrap();
        beverages.category_name = "Drinks".to_string();
        let mut changes = ChangeSet::new();
        storage.update(&mut changes, beverages).await.unwrap();
        storage.delete(&mut changes, &CategoryId(3)).await.unwrap();
        storage.commit(changes).await.unwrap();

        assert_eq!(
            storage.get(&CategoryId(1)).await.unwrap().unwrap().category_name,
            "Drinks"
        );
        assert!(!storage.exists(&CategoryId(3)).await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_commit_applies_nothing() {
        let storage = seeded();

        let mut changes = ChangeSet::new();
        storage.insert(&mut changes, Category::new("Dairy")).await.unwrap();
        storage.delete(&mut changes, &CategoryId(99)).await.unwrap();

        let result = storage.commit(changes).await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
        assert_eq!(storage.count(None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_insert_existing_key_conflicts() {
        let storage = InMemoryStorage::with_entities(vec![Customer::new("ALFKI", "Alfreds")]);

        let mut changes = ChangeSet::new();
        storage
            .insert(&mut changes, Customer::new("ALFKI", "Someone else"))
            .await
            .unwrap();

        assert!(matches!(
            storage.commit(changes).await,
            Err(DomainError::Conflict { .. })
        ));
        assert_eq!(
            storage.get(&CustomerId::new("ALFKI")).await.unwrap().unwrap().company_name,
            "Alfreds"
        );
    }

    #[tokio::test]
    async fn test_pending_conflict_does_not_touch_other_commits() {
        let storage = InMemoryStorage::with_entities(vec![Customer::new("ALFKI", "Alfreds")]);

        let mut duplicate = ChangeSet::new();
        storage
            .insert(&mut duplicate, Customer::new("ALFKI", "Someone else"))
            .await
            .unwrap();

        let mut changes = ChangeSet::new();
        storage
            .insert(&mut changes, Customer::new("NEWCO", "New Company"))
            .await
            .unwrap();
        assert_eq!(storage.commit(changes).await.unwrap(), 1);
        assert!(storage.exists(&CustomerId::new("NEWCO")).await.unwrap());

        assert!(matches!(
            storage.commit(duplicate).await,
            Err(DomainError::Conflict { .. })
        ));
        assert_eq!(storage.count(None).await.unwrap(), 2);
        assert_eq!(
            storage.get(&CustomerId::new("ALFKI")).await.unwrap().unwrap().company_name,
            "Alfreds"
        );
    }

    #[tokio::test]
    async fn test_string_keys_must_be_supplied() {
        let storage: InMemoryStorage<Customer> = InMemoryStorage::new();

        let mut changes = ChangeSet::new();
        let result = storage.insert(&mut changes, Customer::new("", "Nameless")).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_filtered_sorted_page() {
        let storage = seeded();
        let filter = CategoryFilter {
            is_deleted: Some(false),
            ..Default::default()
        };

        let rows = storage
            .list(
                Some(&filter),
                &SortSpec::new(Some("category_name"), SortDirection::Desc),
                &PageSpec::new(Some(1), Some(1), 10),
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category_name, "Confections");
        assert_eq!(storage.count(Some(&filter)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_unknown_sort_field_uses_key_order() {
        let storage = seeded();

        let rows = storage
            .list(
                None,
                &SortSpec::new(Some("colour"), SortDirection::Asc),
                &PageSpec::default(),
            )
            .await
            .unwrap();
        let ids: Vec<i32> = rows.iter().map(|c| c.category_id.0).collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }
}
