use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A tracked procurement request. `status` is a free-form workflow tag; new
/// records start as "pending".
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ProcurementRequest {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub department: String,
    #[serde(rename = "requestedBy")]
    pub requested_by: String,
    pub quantity: u32,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// A cost estimation, optionally linked to a procurement request.
/// `confidence` is the estimator's 0..=1 score when one was produced.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CostEstimation {
    pub id: u64,
    #[serde(rename = "requestId")]
    pub request_id: Option<u64>,
    pub summary: String,
    pub total: f64,
    pub currency: String,
    pub confidence: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    #[serde(rename = "contactEmail")]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Document {
    pub id: u64,
    #[serde(rename = "requestId")]
    pub request_id: Option<u64>,
    pub title: String,
    pub url: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

// Drafts for insertion. Ids exist only once the store has allocated one, so
// these carry every field except `id`.

#[derive(Clone, Debug)]
pub struct NewProcurementRequest {
    pub title: String,
    pub description: Option<String>,
    pub department: String,
    pub requested_by: String,
    pub quantity: u32,
    pub status: String,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct NewCostEstimation {
    pub request_id: Option<u64>,
    pub summary: String,
    pub total: f64,
    pub currency: String,
    pub confidence: Option<f64>,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct NewSupplier {
    pub name: String,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct NewDocument {
    pub request_id: Option<u64>,
    pub title: String,
    pub url: String,
    pub created_at: String,
}

// Error response DTOs shared by every route
#[derive(Serialize, Clone, Debug)]
pub struct ValidationIssue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ValidationIssue>>,
}

impl ErrorResponse {
    pub fn from_message(message: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            message: message.into(),
            errors: None,
        }
    }
}

// Helper function to get current timestamp as string
pub fn now_str() -> String {
    Utc::now().to_rfc3339()
}
