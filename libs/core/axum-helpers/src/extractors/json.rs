use axum::{
    Json,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::AppError;

/// `Json<T>` that rejects with [`AppError::JsonExtractorRejection`].
///
/// Malformed JSON, a wrong `Content-Type` or a body that does not match `T`
/// produce the standard error body with the status axum assigns (400, 415
/// or 422).
///
/// ```ignore
/// async fn create(AppJson(input): AppJson<ProductRequest>) -> StatusCode { .. }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

impl<T: Serialize> IntoResponse for AppJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::Value;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Input {
        name: String,
    }

    fn app() -> Router {
        Router::new().route(
            "/",
            post(|AppJson(input): AppJson<Input>| async move { input.name }),
        )
    }

    async fn send(body: &'static str, content_type: &str) -> (StatusCode, Vec<u8>) {
        let request = axum::http::Request::post("/")
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let (status, body) = send(r#"{"name":"Note 20"}"#, "application/json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Note 20");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send("{not json", "application/json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"], "JSON_EXTRACTION");
        assert_eq!(body["code"], 1003);
    }

    #[tokio::test]
    async fn test_missing_field_is_unprocessable() {
        let (status, _) = send(r#"{"other":1}"#, "application/json").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_unsupported() {
        let (status, _) = send(r#"{"name":"x"}"#, "text/plain").await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
