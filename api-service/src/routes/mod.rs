use axum::{
    extract::Request,
    middleware,
    routing::get,
    Json, Router,
};
use log::{info, warn};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{
    document_handlers::{create_document, get_document, list_documents},
    estimation_handlers::{create_estimation, get_estimation, list_estimations},
    health_check,
    request_handlers::{
        create_request, get_request, list_request_documents, list_request_estimations,
        list_requests,
    },
    supplier_handlers::{create_supplier, get_supplier, list_suppliers},
};
use rekesh_shared::models::ErrorResponse;
use rekesh_shared::store::{memory::MemoryProcurementStore, ProcurementStore};

/// Creates a router with the default store
pub fn create_router() -> Router {
    info!("Creating router with in-memory store");

    let store = Arc::new(MemoryProcurementStore::new());

    // Check if we should serve routes without the base path prefix
    let remove_base_path = std::env::var("REMOVE_BASE_PATH")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    // If REMOVE_BASE_PATH is set to true, don't add the /api prefix
    let prefix = if remove_base_path { "" } else { "/api" };
    info!("Using API route prefix: {}", prefix);

    create_router_with_store(store, prefix)
}

/// Creates a router with a given store implementation
pub fn create_router_with_store<S>(store: Arc<S>, prefix: &str) -> Router
where
    S: ProcurementStore + 'static,
{
    info!("Setting up API routes with prefix: '{}'", prefix);

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Logging middleware to trace all requests
    async fn logging_middleware(
        req: Request,
        next: axum::middleware::Next,
    ) -> impl axum::response::IntoResponse {
        info!(
            "Router received request: method={}, uri={}",
            req.method(),
            req.uri()
        );
        next.run(req).await
    }

    // Create the API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/requests", get(list_requests).post(create_request))
        .route("/requests/:id", get(get_request))
        .route("/requests/:id/estimations", get(list_request_estimations))
        .route("/requests/:id/documents", get(list_request_documents))
        .route("/estimations", get(list_estimations).post(create_estimation))
        .route("/estimations/:id", get(get_estimation))
        .route("/suppliers", get(list_suppliers).post(create_supplier))
        .route("/suppliers/:id", get(get_supplier))
        .route("/documents", get(list_documents).post(create_document))
        .route("/documents/:id", get(get_document))
        .with_state(store);

    // Create the main router
    let router = if prefix.is_empty() {
        // For tests or when no prefix is needed, don't nest the routes
        api_routes
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    } else {
        // For production, nest the routes under the prefix
        Router::new()
            .nest(prefix, api_routes)
            .layer(cors)
            .layer(middleware::from_fn(logging_middleware))
    };

    // Add a fallback handler for 404s
    router.fallback(|req: Request| async move {
        warn!("No route matched for: {} {}", req.method(), req.uri());
        (
            axum::http::StatusCode::NOT_FOUND,
            Json(ErrorResponse::from_message(
                "The requested resource was not found",
            )),
        )
    })
}
