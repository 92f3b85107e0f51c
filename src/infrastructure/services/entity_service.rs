//! Generic entity service - cached CRUD over one entity type

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::domain::cache::{Cache, CacheExt, CacheKeyParams, EntityCacheKeys};
use crate::domain::crud::{BusinessValidation, EntityHooks, EntityMapper, Pagination, ServiceResponse};
use crate::domain::storage::{
    ChangeSet, DEFAULT_PAGE_SIZE, EntityFilter, PageSpec, SortDirection, SortSpec, Storage,
    StorageEntity,
};
use crate::domain::DomainError;

type EntityOf<M> = <M as EntityMapper>::Entity;
type KeyOf<M> = <EntityOf<M> as StorageEntity>::Key;

/// Sort and paging inputs of a list call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListParams {
    pub sort_field: Option<String>,
    pub sort_direction: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ListParams {
    pub fn page(page: i64, page_size: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = Some(direction.into());
        self
    }
}

/// CRUD service for one entity type with a read-through cache
///
/// Reads are cached without expiry under keys that start with the service's
/// prefix. Every successful write drops all keys with that prefix.
pub struct EntityService<M: EntityMapper, H: EntityHooks<M>> {
    storage: Arc<dyn Storage<EntityOf<M>>>,
    cache: Arc<dyn Cache>,
    mapper: M,
    hooks: H,
    keys: EntityCacheKeys,
    entity_name: String,
    default_page_size: u64,
}

impl<M: EntityMapper, H: EntityHooks<M>> fmt::Debug for EntityService<M, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityService")
            .field("entity_name", &self.entity_name)
            .field("cache_prefix", &self.keys.prefix())
            .field("default_page_size", &self.default_page_size)
            .finish_non_exhaustive()
    }
}

impl<M: EntityMapper, H: EntityHooks<M>> EntityService<M, H> {
    pub fn new(
        storage: Arc<dyn Storage<EntityOf<M>>>,
        cache: Arc<dyn Cache>,
        mapper: M,
        hooks: H,
        cache_prefix: impl Into<String>,
        entity_name: impl Into<String>,
    ) -> Self {
        Self {
            storage,
            cache,
            mapper,
            hooks,
            keys: EntityCacheKeys::new(cache_prefix),
            entity_name: entity_name.into(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Page size used when a list call asks for none (or a non-positive one)
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    pub fn cache_prefix(&self) -> &str {
        self.keys.prefix()
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    /// Lists a filtered, sorted page of entities
    ///
    /// An empty page is reported as `NotFound`.
    pub async fn list(
        &self,
        filter: Option<&dyn EntityFilter<EntityOf<M>>>,
        params: &ListParams,
    ) -> ServiceResponse<Vec<M::Dto>> {
        let sort = SortSpec::new(
            params.sort_field.as_deref(),
            SortDirection::parse(params.sort_direction.as_deref()),
        );
        let page = PageSpec::new(params.page, params.page_size, self.default_page_size);

        let cache_key = match self.list_cache_key(filter, &sort, &page) {
            Ok(key) => key,
            Err(e) => return self.failure("list", e),
        };

        match self.cache.get::<ServiceResponse<Vec<M::Dto>>>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!(
                    entity = %self.entity_name,
                    cache_key = %cache_key,
                    cache_status = "HIT",
                    page = page.page(),
                    "Served list from cache"
                );
                return cached;
            }
            Ok(None) => {
                debug!(
                    entity = %self.entity_name,
                    cache_key = %cache_key,
                    cache_status = "MISS",
                    page = page.page(),
                    "List not cached, querying storage"
                );
            }
            Err(e) => {
                error!(entity = %self.entity_name, cache_status = "ERROR", error = %e, "Cache read failed");
                return self.failure("list", e);
            }
        }

        match self.load_page(filter, &sort, &page, &cache_key).await {
            Ok(response) => response,
            Err(e) => {
                error!(entity = %self.entity_name, cache_status = "ERROR", error = %e, "List failed");
                self.failure("list", e)
            }
        }
    }

    async fn load_page(
        &self,
        filter: Option<&dyn EntityFilter<EntityOf<M>>>,
        sort: &SortSpec,
        page: &PageSpec,
        cache_key: &str,
    ) -> Result<ServiceResponse<Vec<M::Dto>>, DomainError> {
        let total_count = self.storage.count(filter).await?;
        let rows = self.storage.list(filter, sort, page).await?;

        if rows.is_empty() {
            debug!(entity = %self.entity_name, cache_status = "EMPTY", page = page.page(), "No rows matched");
            return Ok(ServiceResponse::not_found(format!(
                "No {} records found",
                self.entity_name.to_lowercase()
            )));
        }

        let data: Vec<M::Dto> = rows.iter().map(|e| self.mapper.to_dto(e)).collect();
        let pagination = Pagination::new(total_count, page.page(), page.page_size());
        let response = ServiceResponse::ok_paged(
            data,
            format!("{} list retrieved successfully", self.entity_name),
            pagination,
        );

        self.cache.set(cache_key, &response, None).await?;

        debug!(
            entity = %self.entity_name,
            cache_key = %cache_key,
            rows = rows.len(),
            total_pages = pagination.total_pages,
            "Cached list page"
        );

        Ok(response)
    }

    /// Fetches one entity by key
    pub async fn get_by_id(&self, key: &KeyOf<M>) -> ServiceResponse<M::Dto> {
        let cache_key = self.keys.id_key(key);

        match self.cache.get::<ServiceResponse<M::Dto>>(&cache_key).await {
            Ok(Some(cached)) => {
                debug!(entity = %self.entity_name, key = %key, cache_status = "HIT", "Served entity from cache");
                return cached;
            }
            Ok(None) => {
                debug!(entity = %self.entity_name, key = %key, cache_status = "MISS", "Entity not cached");
            }
            Err(e) => return self.failure("get", e),
        }

        let entity = match self.storage.get(key).await {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                warn!(entity = %self.entity_name, key = %key, "Entity not found");
                return self.not_found();
            }
            Err(e) => return self.failure("get", e),
        };

        let response = ServiceResponse::ok(
            self.mapper.to_dto(&entity),
            format!("{} retrieved successfully", self.entity_name),
        );

        if let Err(e) = self.cache.set(&cache_key, &response, None).await {
            return self.failure("get", e);
        }

        response
    }

    /// Creates an entity after its business rules pass
    pub async fn add(&self, dto: M::CreateDto) -> ServiceResponse<M::Dto> {
        info!(entity = %self.entity_name, "Adding entity");

        if let BusinessValidation::Invalid { message, errors } =
            self.hooks.validate_for_create(&dto).await
        {
            warn!(entity = %self.entity_name, errors = ?errors, "Create rejected by business rules");
            return ServiceResponse::bad_request(message, errors);
        }

        let entity = self.mapper.to_entity(dto);

        let persisted = match self.persist_insert(entity).await {
            Ok(persisted) => persisted,
            Err(e) => return self.failure("add", e),
        };

        info!(entity = %self.entity_name, key = %persisted.key(), "Entity added");

        ServiceResponse::created(
            self.mapper.to_dto(&persisted),
            format!("{} added successfully", self.entity_name),
        )
    }

    async fn persist_insert(&self, entity: EntityOf<M>) -> Result<EntityOf<M>, DomainError> {
        let mut changes = ChangeSet::new();
        let persisted = self.storage.insert(&mut changes, entity).await?;
        self.commit_and_invalidate(changes).await?;
        Ok(persisted)
    }

    /// Applies an update payload to an existing entity
    pub async fn update(&self, dto: M::UpdateDto) -> ServiceResponse<M::Dto> {
        let key = self.hooks.key_from_update(&dto);
        info!(entity = %self.entity_name, key = %key, "Updating entity");

        let mut entity = match self.storage.get(&key).await {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                warn!(entity = %self.entity_name, key = %key, "Entity not found for update");
                return self.not_found();
            }
            Err(e) => return self.failure("update", e),
        };

        if let BusinessValidation::Invalid { message, errors } =
            self.hooks.validate_for_update(&dto, &entity).await
        {
            warn!(entity = %self.entity_name, key = %key, errors = ?errors, "Update rejected by business rules");
            return ServiceResponse::bad_request(message, errors);
        }

        self.mapper.apply_update(&dto, &mut entity);

        if let Err(e) = self.persist_update(entity.clone()).await {
            return self.failure("update", e);
        }

        info!(entity = %self.entity_name, key = %key, "Entity updated");

        ServiceResponse::ok(
            self.mapper.to_dto(&entity),
            format!("{} updated successfully", self.entity_name),
        )
    }

    async fn persist_update(&self, entity: EntityOf<M>) -> Result<(), DomainError> {
        let mut changes = ChangeSet::new();
        self.storage.update(&mut changes, entity).await?;
        self.commit_and_invalidate(changes).await
    }

    /// Deletes an entity, flipping its marker when the type supports soft delete
    pub async fn delete(&self, key: &KeyOf<M>) -> ServiceResponse<()> {
        info!(entity = %self.entity_name, key = %key, "Deleting entity");

        let mut entity = match self.storage.get(key).await {
            Ok(Some(entity)) => entity,
            Ok(None) => {
                warn!(entity = %self.entity_name, key = %key, "Entity not found for deletion");
                return self.not_found();
            }
            Err(e) => return self.failure("delete", e),
        };

        let mut changes = ChangeSet::new();
        let staged = if self.hooks.supports_soft_delete() {
            info!(entity = %self.entity_name, key = %key, "Performing soft delete");
            self.hooks.soft_delete(&mut entity);
            self.storage.update(&mut changes, entity).await
        } else {
            info!(entity = %self.entity_name, key = %key, "Performing hard delete");
            self.storage.delete(&mut changes, key).await
        };

        let result = match staged {
            Ok(()) => self.commit_and_invalidate(changes).await,
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            return self.failure("delete", e);
        }

        info!(entity = %self.entity_name, key = %key, "Entity deleted");

        ServiceResponse::no_content(format!("{} deleted successfully", self.entity_name))
    }

    async fn commit_and_invalidate(
        &self,
        changes: ChangeSet<EntityOf<M>>,
    ) -> Result<(), DomainError> {
        self.storage.commit(changes).await?;
        self.invalidate().await
    }

    /// Drops every cached list and by-id entry for this entity type
    pub async fn invalidate(&self) -> Result<(), DomainError> {
        let removed = self.cache.remove_by_prefix(self.keys.prefix()).await?;

        debug!(
            entity = %self.entity_name,
            prefix = %self.keys.prefix(),
            removed,
            "Invalidated cache"
        );

        Ok(())
    }

    fn list_cache_key(
        &self,
        filter: Option<&dyn EntityFilter<EntityOf<M>>>,
        sort: &SortSpec,
        page: &PageSpec,
    ) -> Result<String, DomainError> {
        let primary = match filter {
            Some(filter) => filter.fingerprint()?,
            None => "null".to_string(),
        };

        let params = CacheKeyParams::new(primary)
            .with_component("sort", sort.field().unwrap_or(""))
            .with_component("dir", sort.direction().as_str())
            .with_component("page", page.page().to_string())
            .with_component("size", page.page_size().to_string());

        Ok(self.keys.list_key(&params))
    }

    fn not_found<T>(&self) -> ServiceResponse<T> {
        ServiceResponse::not_found(format!("{} not found", self.entity_name))
    }

    fn failure<T>(&self, operation: &str, error: DomainError) -> ServiceResponse<T> {
        error!(entity = %self.entity_name, operation, error = %error, "Operation failed");
        ServiceResponse::internal_error(format!(
            "Failed to {} {}: {}",
            operation,
            self.entity_name.to_lowercase(),
            error
        ))
    }
}
