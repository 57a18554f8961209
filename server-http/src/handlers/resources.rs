//! The five collection operations, generic over the record type.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use shared_http::api::{Ack, Record, RecordId};
use tracing::info;

use crate::state::AppState;
use crate::store::StoreError;

/// GET /api/{collection}
pub async fn list<E: Record>(State(state): State<AppState>) -> Result<Json<Vec<E>>, StoreError> {
    Ok(Json(state.db.list::<E>().await?))
}

/// GET /api/{collection}/{id}
pub async fn get<E: Record>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<E>, StoreError> {
    Ok(Json(state.db.get::<E>(id).await?))
}

/// POST /api/{collection}
pub async fn create<E: Record>(
    State(state): State<AppState>,
    Json(record): Json<E>,
) -> Result<(StatusCode, Json<E>), StoreError> {
    info!("POST: collection={}", E::COLLECTION);
    let created = state.db.insert(record).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/{collection}/{id}
pub async fn update<E: Record>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(record): Json<E>,
) -> Result<Json<E>, StoreError> {
    info!("PUT: collection={}, id={}", E::COLLECTION, id);
    Ok(Json(state.db.replace(id, record).await?))
}

/// DELETE /api/{collection}/{id}
pub async fn delete<E: Record>(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<Ack>, StoreError> {
    info!("DELETE: collection={}, id={}", E::COLLECTION, id);
    state.db.remove::<E>(id).await?;
    Ok(Json(Ack::with_message(format!(
        "Registro {} excluído de {}.",
        id,
        E::COLLECTION
    ))))
}
