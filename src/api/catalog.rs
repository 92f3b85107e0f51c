//! CRUD endpoints shared by every catalog entity

use axum::{
    Router,
    extract::{Path, Query, State},
    routing::get,
};
use tracing::debug;

use crate::api::state::{AppState, CatalogResource};
use crate::api::types::Json;
use crate::domain::{EntityMapper, ServiceResponse};
use crate::infrastructure::services::ListParams;

type DtoOf<R> = <<R as CatalogResource>::Mapper as EntityMapper>::Dto;

/// GET /api/{entity}
pub async fn list_entities<R: CatalogResource>(
    State(state): State<AppState>,
    Query(filter): Query<R::Filter>,
    Query(params): Query<ListParams>,
) -> ServiceResponse<Vec<DtoOf<R>>> {
    debug!(resource = R::PATH, ?filter, ?params, "Listing entities");

    R::service(&state).list(Some(&filter), &params).await
}

/// GET /api/{entity}/{id}
pub async fn get_entity<R: CatalogResource>(
    State(state): State<AppState>,
    Path(id): Path<R::Key>,
) -> ServiceResponse<DtoOf<R>> {
    debug!(resource = R::PATH, id = %id, "Getting entity");

    R::service(&state).get_by_id(&id).await
}

/// POST /api/{entity}
pub async fn create_entity<R: CatalogResource>(
    State(state): State<AppState>,
    Json(dto): Json<R::Create>,
) -> ServiceResponse<DtoOf<R>> {
    debug!(resource = R::PATH, "Creating entity");

    R::service(&state).add(dto).await
}

/// PUT /api/{entity}
pub async fn update_entity<R: CatalogResource>(
    State(state): State<AppState>,
    Json(dto): Json<R::Update>,
) -> ServiceResponse<DtoOf<R>> {
    debug!(resource = R::PATH, "Updating entity");

    R::service(&state).update(dto).await
}

/// DELETE /api/{entity}/{id}
pub async fn delete_entity<R: CatalogResource>(
    State(state): State<AppState>,
    Path(id): Path<R::Key>,
) -> ServiceResponse<()> {
    debug!(resource = R::PATH, id = %id, "Deleting entity");

    R::service(&state).delete(&id).await
}

/// Collection and item routes for one entity type
pub fn resource_routes<R: CatalogResource>(router: Router<AppState>) -> Router<AppState> {
    let collection = format!("/api/{}", R::PATH);
    let item = format!("{}/{{id}}", collection);

    router
        .route(
            &collection,
            get(list_entities::<R>)
                .post(create_entity::<R>)
                .put(update_entity::<R>),
        )
        .route(&item, get(get_entity::<R>).delete(delete_entity::<R>))
}
