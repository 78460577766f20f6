use std::sync::Arc;

use axum::Router;

use rekesh_shared::models::{now_str, CostEstimation, Document, ProcurementRequest, Supplier};
use rekesh_shared::store::memory::MemoryProcurementStore;

use crate::routes;

/// Router over an empty store with no route prefix
pub fn empty_app() -> Router {
    routes::create_router_with_store(Arc::new(MemoryProcurementStore::new()), "")
}

/// Router over a store seeded with the fixed data set below
pub fn test_app() -> Router {
    routes::create_router_with_store(Arc::new(seeded_store()), "")
}

pub fn seeded_store() -> MemoryProcurementStore {
    let now = now_str();
    MemoryProcurementStore::with_data(
        test_requests(&now),
        test_estimations(&now),
        test_suppliers(&now),
        test_documents(&now),
    )
}

// Helper functions to create test data
fn test_requests(now: &str) -> Vec<ProcurementRequest> {
    vec![
        ProcurementRequest {
            id: 1,
            title: "Standing desks".to_string(),
            description: Some("Height adjustable, 20 units".to_string()),
            department: "Operations".to_string(),
            requested_by: "dana".to_string(),
            quantity: 20,
            status: "pending".to_string(),
            created_at: now.to_string(),
        },
        ProcurementRequest {
            id: 2,
            title: "Laptops for QA".to_string(),
            description: None,
            department: "Engineering".to_string(),
            requested_by: "omer".to_string(),
            quantity: 5,
            status: "pending".to_string(),
            created_at: now.to_string(),
        },
    ]
}

fn test_estimations(now: &str) -> Vec<CostEstimation> {
    vec![
        CostEstimation {
            id: 1,
            request_id: Some(1),
            summary: "Initial desk quote".to_string(),
            total: 42000.0,
            currency: "ILS".to_string(),
            confidence: Some(0.7),
            created_at: now.to_string(),
        },
        CostEstimation {
            id: 2,
            request_id: None,
            summary: "Ballpark office refresh".to_string(),
            total: 150000.0,
            currency: "ILS".to_string(),
            confidence: None,
            created_at: now.to_string(),
        },
    ]
}

fn test_suppliers(now: &str) -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "Acme Office Supply".to_string(),
            contact_email: Some("sales@acme.example".to_string()),
            phone: Some("03-5551234".to_string()),
            category: Some("furniture".to_string()),
            created_at: now.to_string(),
        },
        Supplier {
            id: 2,
            name: "TechSource Ltd".to_string(),
            contact_email: None,
            phone: None,
            category: Some("hardware".to_string()),
            created_at: now.to_string(),
        },
    ]
}

fn test_documents(now: &str) -> Vec<Document> {
    vec![
        Document {
            id: 1,
            request_id: Some(1),
            title: "Desk quote PDF".to_string(),
            url: "https://files.example/desk-quote.pdf".to_string(),
            created_at: now.to_string(),
        },
        Document {
            id: 2,
            request_id: None,
            title: "Office layout sketch".to_string(),
            url: "https://files.example/layout.png".to_string(),
            created_at: now.to_string(),
        },
    ]
}
