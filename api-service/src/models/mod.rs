use serde::Deserialize;
use validator::Validate;

// Request DTOs. Validation is applied by the ValidatedJson extractor before
// any handler body runs; optional fields are only checked when present.

#[derive(Deserialize, Validate, Debug)]
pub struct CreateProcurementRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[serde(rename = "requestedBy")]
    #[validate(length(min = 1, message = "Requester name is required"))]
    pub requested_by: String,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: u32,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateEstimationRequest {
    #[serde(rename = "requestId")]
    pub request_id: Option<u64>,
    #[validate(length(min = 1, message = "Summary is required"))]
    pub summary: String,
    #[validate(range(min = 0.0, message = "Total must not be negative"))]
    pub total: f64,
    #[validate(length(min = 3, max = 3, message = "Currency must be a 3-letter code"))]
    pub currency: Option<String>,
    #[validate(range(min = 0.0, max = 1.0, message = "Confidence must be between 0 and 1"))]
    pub confidence: Option<f64>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateSupplierRequest {
    #[validate(length(min = 1, message = "Supplier name is required"))]
    pub name: String,
    #[serde(rename = "contactEmail")]
    #[validate(email(message = "Contact email must be a valid email address"))]
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
}

#[derive(Deserialize, Validate, Debug)]
pub struct CreateDocumentRequest {
    #[serde(rename = "requestId")]
    pub request_id: Option<u64>,
    #[validate(length(min = 1, message = "Document title is required"))]
    pub title: String,
    #[validate(url(message = "URL must be a valid URL"))]
    pub url: String,
}
