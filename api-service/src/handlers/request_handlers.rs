use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rekesh_shared::error::Result;
// Import models from shared crate
use rekesh_shared::models::{
    now_str, CostEstimation, Document, NewProcurementRequest, ProcurementRequest,
};
use rekesh_shared::store::ProcurementStore;
use rekesh_shared::validation::parse_id;

// Import request payload types from local models
use crate::handlers::ValidatedJson;
use crate::models::CreateProcurementRequest;

// GET /requests
pub async fn list_requests<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<ProcurementRequest>>>
where
    S: ProcurementStore,
{
    let requests = store.list_requests().await?;

    Ok(Json(requests))
}

// GET /requests/:id
pub async fn get_request<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<ProcurementRequest>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;
    let request = store.get_request(id).await?;

    Ok(Json(request))
}

// POST /requests
pub async fn create_request<S>(
    State(store): State<Arc<S>>,
    ValidatedJson(payload): ValidatedJson<CreateProcurementRequest>,
) -> Result<(StatusCode, Json<ProcurementRequest>)>
where
    S: ProcurementStore,
{
    let new_request = NewProcurementRequest {
        title: payload.title,
        description: payload.description,
        department: payload.department,
        requested_by: payload.requested_by,
        quantity: payload.quantity,
        // New requests always enter the pipeline as pending
        status: "pending".to_string(),
        created_at: now_str(),
    };

    let created = store.create_request(new_request).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

// GET /requests/:id/estimations
pub async fn list_request_estimations<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CostEstimation>>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;

    // A missing request is a 404; a request with no estimations is an empty list
    store.get_request(id).await?;
    let estimations = store.list_estimations_by_request(id).await?;

    Ok(Json(estimations))
}

// GET /requests/:id/documents
pub async fn list_request_documents<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Document>>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;

    store.get_request(id).await?;
    let documents = store.list_documents_by_request(id).await?;

    Ok(Json(documents))
}
