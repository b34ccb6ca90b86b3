//! Customer CRUD handlers.
//!
//! Bodies are decoded from raw bytes rather than through `Json<T>` so that a
//! missing `content-type` is accepted and every decode failure maps to 400
//! with the decoder's own message.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info};

use service::{Customer, StoreError};

use super::AppState;
use crate::errors::ApiError;

fn decode(body: &Bytes) -> Result<Customer, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::decode)
}

fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let body = serde_json::to_vec(value).map_err(|e| {
        error!(error = %e, "encode response failed");
        ApiError::internal("Error")
    })?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// POST /api/customer
pub async fn add(State(state): State<AppState>, body: Bytes) -> Result<String, ApiError> {
    let customer = decode(&body)?;
    let id = customer.id.clone();
    match state.store.create(customer).await {
        Ok(()) => {
            info!(id = %id, "customer created");
            Ok(format!("{id}: Created"))
        }
        Err(StoreError::DuplicateKey(_)) => Err(ApiError::internal(format!("{id}: exists"))),
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// PUT /api/customer/:id
///
/// Full replace. An empty `ID` in the body takes the path id; a different
/// non-empty one is rejected so the key and the record never disagree.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<String, ApiError> {
    let mut customer = decode(&body)?;
    if customer.id.is_empty() {
        customer.id = id.clone();
    } else if customer.id != id {
        return Err(ApiError::bad_request(format!("{id}: ID mismatch")));
    }
    match state.store.update(&id, customer).await {
        Ok(()) => {
            info!(id = %id, "customer updated");
            Ok(format!("{id}: updated"))
        }
        Err(StoreError::NotFound(_)) => Err(ApiError::bad_request(format!("{id}: does not Exists"))),
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// DELETE /api/customer/:id
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<String, ApiError> {
    match state.store.delete(&id).await {
        Ok(()) => {
            info!(id = %id, "customer deleted");
            Ok(format!("{id}: deleted"))
        }
        Err(StoreError::NotFound(_)) => Err(ApiError::bad_request(format!("{id}: doesn't Exists"))),
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// GET /api/customer/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response, ApiError> {
    match state.store.get_by_id(&id).await {
        Ok(customer) => json_response(&customer),
        Err(StoreError::NotFound(_)) => Err(ApiError::bad_request(format!("{id}: does not Exist"))),
        Err(e) => Err(ApiError::internal(e.to_string())),
    }
}

/// GET /api/customer
pub async fn get_all(State(state): State<AppState>) -> Result<Response, ApiError> {
    let customers = state.store.get_all().await.map_err(|e| {
        error!(error = %e, "list customers failed");
        ApiError::internal("Error")
    })?;
    info!(count = customers.len(), "list customers");
    json_response(&customers)
}
