use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rekesh_shared::error::Result;
use rekesh_shared::models::{now_str, CostEstimation, NewCostEstimation};
use rekesh_shared::store::ProcurementStore;
use rekesh_shared::validation::parse_id;

use crate::handlers::ValidatedJson;
use crate::models::CreateEstimationRequest;

// GET /estimations
pub async fn list_estimations<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<CostEstimation>>>
where
    S: ProcurementStore,
{
    let estimations = store.list_estimations().await?;

    Ok(Json(estimations))
}

// GET /estimations/:id
pub async fn get_estimation<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<CostEstimation>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;
    let estimation = store.get_estimation(id).await?;

    Ok(Json(estimation))
}

// POST /estimations
pub async fn create_estimation<S>(
    State(store): State<Arc<S>>,
    ValidatedJson(payload): ValidatedJson<CreateEstimationRequest>,
) -> Result<(StatusCode, Json<CostEstimation>)>
where
    S: ProcurementStore,
{
    // A linked request must exist before the estimation is recorded
    if let Some(request_id) = payload.request_id {
        store.get_request(request_id).await?;
    }

    let new_estimation = NewCostEstimation {
        request_id: payload.request_id,
        summary: payload.summary,
        total: payload.total,
        currency: payload.currency.unwrap_or_else(|| "ILS".to_string()),
        confidence: payload.confidence,
        created_at: now_str(),
    };

    let created = store.create_estimation(new_estimation).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
