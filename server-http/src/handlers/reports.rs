use axum::{
    extract::{Path, State},
    Json,
};
use shared_http::api::{ArrecadacaoFretes, FreteFuncionario, MediaFretes, RecordId};

use crate::reports;
use crate::state::AppState;
use crate::store::StoreError;

// Rows are wrapped in an outer array, one element per result set.

/// GET /media-fretes/{id_estado}
pub async fn media_fretes(
    State(state): State<AppState>,
    Path(id_estado): Path<RecordId>,
) -> Result<Json<Vec<Vec<MediaFretes>>>, StoreError> {
    Ok(Json(vec![reports::media_fretes(&state.db, id_estado).await?]))
}

/// GET /arrecadacao-fretes/{id_estado}
pub async fn arrecadacao_fretes(
    State(state): State<AppState>,
    Path(id_estado): Path<RecordId>,
) -> Result<Json<Vec<Vec<ArrecadacaoFretes>>>, StoreError> {
    Ok(Json(vec![
        reports::arrecadacao_fretes(&state.db, id_estado).await?,
    ]))
}

/// GET /fretes-funcionarios/{mes}/{ano}
pub async fn fretes_funcionarios(
    State(state): State<AppState>,
    Path((mes, ano)): Path<(u32, i32)>,
) -> Result<Json<Vec<Vec<FreteFuncionario>>>, StoreError> {
    Ok(Json(vec![
        reports::fretes_funcionarios(&state.db, mes, ano).await?,
    ]))
}
