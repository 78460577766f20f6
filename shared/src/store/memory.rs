use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::ProcurementStore;
use crate::error::{Result, ServiceError};
use crate::models::{
    CostEstimation, Document, NewCostEstimation, NewDocument, NewProcurementRequest, NewSupplier,
    ProcurementRequest, Supplier,
};

/// One keyed collection plus its id counter. Ids are allocated monotonically
/// from 1 and never reused; a `BTreeMap` keeps listing in ascending id order,
/// which is insertion order.
struct Collection<T> {
    next_id: u64,
    records: BTreeMap<u64, T>,
}

impl<T: Clone> Collection<T> {
    fn new() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }

    fn seeded(records: Vec<T>, id_of: impl Fn(&T) -> u64) -> Self {
        let mut collection = Self::new();
        for record in records {
            let id = id_of(&record);
            collection.next_id = collection.next_id.max(id + 1);
            collection.records.insert(id, record);
        }
        collection
    }

    // Allocation and insertion form one step under the caller's write guard,
    // so no suspension point can ever sit between them.
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let record = build(id);
        self.records.insert(id, record.clone());
        record
    }

    fn list(&self) -> Vec<T> {
        self.records.values().cloned().collect()
    }
}

/// In-memory implementation of ProcurementStore.
///
/// This is the production backend: records live for the process lifetime and
/// nothing is persisted across restarts.
pub struct MemoryProcurementStore {
    requests: RwLock<Collection<ProcurementRequest>>,
    estimations: RwLock<Collection<CostEstimation>>,
    suppliers: RwLock<Collection<Supplier>>,
    documents: RwLock<Collection<Document>>,
}

impl MemoryProcurementStore {
    /// Creates a new empty in-memory store
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(Collection::new()),
            estimations: RwLock::new(Collection::new()),
            suppliers: RwLock::new(Collection::new()),
            documents: RwLock::new(Collection::new()),
        }
    }

    /// Creates a store seeded with initial records. Each collection's id
    /// counter advances past the largest seeded id.
    pub fn with_data(
        requests: Vec<ProcurementRequest>,
        estimations: Vec<CostEstimation>,
        suppliers: Vec<Supplier>,
        documents: Vec<Document>,
    ) -> Self {
        Self {
            requests: RwLock::new(Collection::seeded(requests, |r| r.id)),
            estimations: RwLock::new(Collection::seeded(estimations, |e| e.id)),
            suppliers: RwLock::new(Collection::seeded(suppliers, |s| s.id)),
            documents: RwLock::new(Collection::seeded(documents, |d| d.id)),
        }
    }

    /// Clears every collection and id counter back to pristine state.
    ///
    /// Test harness use only; no route reaches this.
    pub fn reset(&self) -> Result<()> {
        let mut requests = self
            .requests
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;
        let mut estimations = self
            .estimations
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;
        let mut suppliers = self
            .suppliers
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;

        *requests = Collection::new();
        *estimations = Collection::new();
        *suppliers = Collection::new();
        *documents = Collection::new();
        Ok(())
    }
}

impl Default for MemoryProcurementStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcurementStore for MemoryProcurementStore {
    async fn create_request(
        &self,
        new_request: NewProcurementRequest,
    ) -> Result<ProcurementRequest> {
        let mut requests = self
            .requests
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;

        Ok(requests.insert_with(|id| ProcurementRequest {
            id,
            title: new_request.title,
            description: new_request.description,
            department: new_request.department,
            requested_by: new_request.requested_by,
            quantity: new_request.quantity,
            status: new_request.status,
            created_at: new_request.created_at,
        }))
    }

    async fn get_request(&self, id: u64) -> Result<ProcurementRequest> {
        let requests = self
            .requests
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        requests
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("Procurement request {} not found", id)))
    }

    async fn list_requests(&self) -> Result<Vec<ProcurementRequest>> {
        let requests = self
            .requests
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        Ok(requests.list())
    }

    async fn create_estimation(
        &self,
        new_estimation: NewCostEstimation,
    ) -> Result<CostEstimation> {
        let mut estimations = self
            .estimations
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;

        Ok(estimations.insert_with(|id| CostEstimation {
            id,
            request_id: new_estimation.request_id,
            summary: new_estimation.summary,
            total: new_estimation.total,
            currency: new_estimation.currency,
            confidence: new_estimation.confidence,
            created_at: new_estimation.created_at,
        }))
    }

    async fn get_estimation(&self, id: u64) -> Result<CostEstimation> {
        let estimations = self
            .estimations
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        estimations
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("Cost estimation {} not found", id)))
    }

    async fn list_estimations(&self) -> Result<Vec<CostEstimation>> {
        let estimations = self
            .estimations
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        Ok(estimations.list())
    }

    async fn list_estimations_by_request(&self, request_id: u64) -> Result<Vec<CostEstimation>> {
        let estimations = self
            .estimations
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        let linked: Vec<CostEstimation> = estimations
            .records
            .values()
            .filter(|estimation| estimation.request_id == Some(request_id))
            .cloned()
            .collect();

        Ok(linked)
    }

    async fn create_supplier(&self, new_supplier: NewSupplier) -> Result<Supplier> {
        let mut suppliers = self
            .suppliers
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;

        Ok(suppliers.insert_with(|id| Supplier {
            id,
            name: new_supplier.name,
            contact_email: new_supplier.contact_email,
            phone: new_supplier.phone,
            category: new_supplier.category,
            created_at: new_supplier.created_at,
        }))
    }

    async fn get_supplier(&self, id: u64) -> Result<Supplier> {
        let suppliers = self
            .suppliers
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        suppliers
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("Supplier {} not found", id)))
    }

    async fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        let suppliers = self
            .suppliers
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        Ok(suppliers.list())
    }

    async fn create_document(&self, new_document: NewDocument) -> Result<Document> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ServiceError::internal("Failed to acquire write lock"))?;

        Ok(documents.insert_with(|id| Document {
            id,
            request_id: new_document.request_id,
            title: new_document.title,
            url: new_document.url,
            created_at: new_document.created_at,
        }))
    }

    async fn get_document(&self, id: u64) -> Result<Document> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        documents
            .records
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(format!("Document {} not found", id)))
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        Ok(documents.list())
    }

    async fn list_documents_by_request(&self, request_id: u64) -> Result<Vec<Document>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ServiceError::internal("Failed to acquire read lock"))?;

        let linked: Vec<Document> = documents
            .records
            .values()
            .filter(|document| document.request_id == Some(request_id))
            .cloned()
            .collect();

        Ok(linked)
    }
}
