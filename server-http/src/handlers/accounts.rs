use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared_http::api::{AccountForm, Ack};
use tracing::{info, warn};

use super::bad_request;
use crate::state::AppState;
use crate::store::StoreError;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<u32>,
}

/// GET /get-token/customers?page=N
pub async fn list_customers(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> impl IntoResponse {
    let page = query.page.unwrap_or(1);
    info!("Listing customers page {}", page);
    Json(state.accounts.page(page, state.config.page_size).await)
}

/// GET /get-token/customers/{customer_id}
pub async fn get_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Response {
    match state.accounts.get(&customer_id).await {
        Some(customer) => Json(customer).into_response(),
        None => StoreError::UnknownCustomer(customer_id).into_response(),
    }
}

async fn read_fields(mut multipart: Multipart) -> Result<HashMap<String, String>, Response> {
    let mut fields = HashMap::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                warn!("Malformed multipart body: {}", e);
                return Err(bad_request("Formulário inválido."));
            }
        };
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        let value = field.text().await.map_err(|e| {
            warn!("Unreadable multipart field {}: {}", name, e);
            bad_request("Formulário inválido.")
        })?;
        fields.insert(name, value);
    }
    Ok(fields)
}

fn required<'a>(fields: &'a HashMap<String, String>, name: &str) -> Result<&'a str, Response> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| bad_request(format!("Campo {} é obrigatório.", name)))
}

/// DELETE /delete-client (multipart: entry_customer_id, entry_date)
pub async fn deactivate_client(State(state): State<AppState>, multipart: Multipart) -> Response {
    let fields = match read_fields(multipart).await {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    let (customer_id, raw_date) = match (
        required(&fields, AccountForm::ENTRY_CUSTOMER_ID),
        required(&fields, AccountForm::ENTRY_DATE),
    ) {
        (Ok(id), Ok(date)) => (id, date),
        (Err(response), _) | (_, Err(response)) => return response,
    };
    let Ok(date) = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") else {
        return bad_request(format!("Data inválida: {}", raw_date));
    };

    match state.accounts.deactivate(customer_id, date).await {
        Ok(_) => Json(Ack::with_message("Cliente desativado.")).into_response(),
        Err(e) => e.into_response(),
    }
}

/// PUT /reactivate-client (multipart: entry_customer_id)
pub async fn reactivate_client(State(state): State<AppState>, multipart: Multipart) -> Response {
    let fields = match read_fields(multipart).await {
        Ok(fields) => fields,
        Err(response) => return response,
    };
    let customer_id = match required(&fields, AccountForm::ENTRY_CUSTOMER_ID) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.accounts.reactivate(customer_id).await {
        Ok(_) => Json(Ack::with_message("Cliente reativado.")).into_response(),
        Err(e) => e.into_response(),
    }
}
