pub mod document_handlers;
pub mod estimation_handlers;
pub mod request_handlers;
pub mod supplier_handlers;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use rekesh_shared::error::ServiceError;

// GET /health
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor that runs schema validation after deserializing.
///
/// Both a body that fails to parse and a payload that fails validation come
/// back as the standard `{success:false, ...}` envelope, so handlers only ever
/// see well-formed input.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await?;
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode, routing::post, Router};
    use serde::Deserialize;
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use validator::Validate;

    use rekesh_shared::test_utils::http_test_utils::{create_test_request, response_to_json};

    #[derive(Deserialize, Validate)]
    struct Probe {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
    }

    async fn probe_handler(ValidatedJson(payload): ValidatedJson<Probe>) -> String {
        payload.name
    }

    fn probe_app() -> Router {
        Router::new().route("/probe", post(probe_handler))
    }

    #[tokio::test]
    async fn test_valid_payload_reaches_the_handler() {
        let app = probe_app();

        let request = create_test_request("POST", "/probe", Some(json!({ "name": "ok" })));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_failed_validation_returns_the_error_envelope() {
        let app = probe_app();

        let request = create_test_request("POST", "/probe", Some(json!({ "name": "" })));
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_to_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["message"], "invalid request data");
        assert_eq!(body["errors"][0]["field"], "name");
        assert_eq!(body["errors"][0]["message"], "Name is required");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_the_error_envelope() {
        let app = probe_app();

        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/probe")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_to_json(response).await;
        assert_eq!(body["success"], Value::Bool(false));
        assert_eq!(body["message"], "invalid request data");
        // The parse failure text rides along as an unnamed issue
        assert!(body["errors"][0]["message"].as_str().is_some());
    }
}
