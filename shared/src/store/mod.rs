use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    CostEstimation, Document, NewCostEstimation, NewDocument, NewProcurementRequest, NewSupplier,
    ProcurementRequest, Supplier,
};

// Expose the in-memory store module
pub mod memory;

/// ProcurementStore trait defining the interface for the data backend.
///
/// Creation allocates the record's id; lookups report misses as `NotFound`
/// errors carrying an entity-specific message, so handlers can propagate them
/// with `?`.
#[async_trait]
pub trait ProcurementStore: Send + Sync + 'static {
    /// Creates a new procurement request, allocating its id
    async fn create_request(
        &self,
        new_request: NewProcurementRequest,
    ) -> Result<ProcurementRequest>;

    /// Gets a procurement request by id
    async fn get_request(&self, id: u64) -> Result<ProcurementRequest>;

    /// Gets all procurement requests in ascending id order
    async fn list_requests(&self) -> Result<Vec<ProcurementRequest>>;

    /// Creates a new cost estimation, allocating its id
    async fn create_estimation(&self, new_estimation: NewCostEstimation)
        -> Result<CostEstimation>;

    /// Gets a cost estimation by id
    async fn get_estimation(&self, id: u64) -> Result<CostEstimation>;

    /// Gets all cost estimations in ascending id order
    async fn list_estimations(&self) -> Result<Vec<CostEstimation>>;

    /// Gets all cost estimations linked to the given procurement request
    async fn list_estimations_by_request(&self, request_id: u64) -> Result<Vec<CostEstimation>>;

    /// Creates a new supplier, allocating its id
    async fn create_supplier(&self, new_supplier: NewSupplier) -> Result<Supplier>;

    /// Gets a supplier by id
    async fn get_supplier(&self, id: u64) -> Result<Supplier>;

    /// Gets all suppliers in ascending id order
    async fn list_suppliers(&self) -> Result<Vec<Supplier>>;

    /// Creates a new document, allocating its id
    async fn create_document(&self, new_document: NewDocument) -> Result<Document>;

    /// Gets a document by id
    async fn get_document(&self, id: u64) -> Result<Document>;

    /// Gets all documents in ascending id order
    async fn list_documents(&self) -> Result<Vec<Document>>;

    /// Gets all documents linked to the given procurement request
    async fn list_documents_by_request(&self, request_id: u64) -> Result<Vec<Document>>;
}
