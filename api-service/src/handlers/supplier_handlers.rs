use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use rekesh_shared::error::Result;
use rekesh_shared::models::{now_str, NewSupplier, Supplier};
use rekesh_shared::store::ProcurementStore;
use rekesh_shared::validation::parse_id;

use crate::handlers::ValidatedJson;
use crate::models::CreateSupplierRequest;

// GET /suppliers
pub async fn list_suppliers<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Supplier>>>
where
    S: ProcurementStore,
{
    let suppliers = store.list_suppliers().await?;

    Ok(Json(suppliers))
}

// GET /suppliers/:id
pub async fn get_supplier<S>(
    State(store): State<Arc<S>>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>>
where
    S: ProcurementStore,
{
    let id = parse_id(&id)?;
    let supplier = store.get_supplier(id).await?;

    Ok(Json(supplier))
}

// POST /suppliers
pub async fn create_supplier<S>(
    State(store): State<Arc<S>>,
    ValidatedJson(payload): ValidatedJson<CreateSupplierRequest>,
) -> Result<(StatusCode, Json<Supplier>)>
where
    S: ProcurementStore,
{
    let new_supplier = NewSupplier {
        name: payload.name,
        contact_email: payload.contact_email,
        phone: payload.phone,
        category: payload.category,
        created_at: now_str(),
    };

    let created = store.create_supplier(new_supplier).await?;

    Ok((StatusCode::CREATED, Json(created)))
}
