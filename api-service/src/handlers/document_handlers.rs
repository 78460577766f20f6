use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rekesh_shared::error::Result;
use rekesh_shared::models::{now_str, Document, NewDocument};
use rekesh_shared::store::ProcurementStore;
use rekesh_shared::validation::parse_id;

use crate::handlers::ValidatedJson;
use crate::models::CreateDocumentRequest;

// GET /documents
pub async fn list_documents<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Document>>>
where
    S: ProcurementStore,
{
    let documents = store.list_documents().await?;

    Ok(Json(documents))
}

// GET /documents/:id
pub async fn get_document<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Document>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;
    let document = store.get_document(id).await?;

    Ok(Json(document))
}

// POST /documents
pub async fn create_document<S>(
    State(store): State<Arc<S>>,
    ValidatedJson(payload): ValidatedJson<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<Document>)>
where
    S: ProcurementStore,
{
    // Documents may only attach to a request that exists
    if let Some(request_id) = payload.request_id {
        store.get_request(request_id).await?;
    }

    let new_document = NewDocument {
        request_id: payload.request_id,
        title: payload.title,
        url: payload.url,
        created_at: now_str(),
    };

    let created = store.create_document(new_document).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
