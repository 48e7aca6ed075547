use crate::domain::model::ContactSubmission;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Best-effort JSON body extractor for contact submissions.
///
/// Bodies without an `application/json` content type, and empty JSON bodies,
/// produce an empty submission instead of a rejection. Malformed JSON and
/// oversize bodies are still rejected with axum's default responses. Only an
/// object or an array is accepted at the top level; any other JSON value is a
/// 400.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LenientJson(pub ContactSubmission);

#[async_trait]
impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            tracing::debug!("Non-JSON body skipped, treating submission as empty");
            return Ok(Self(ContactSubmission::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.is_empty() {
            return Ok(Self(ContactSubmission::default()));
        }

        let Json(body) = Json::<Value>::from_bytes(&bytes).map_err(|rejection| {
            tracing::debug!("Rejected contact body: {}", rejection.body_text());
            rejection.into_response()
        })?;

        if !(body.is_object() || body.is_array()) {
            tracing::debug!("Rejected contact body: top-level value is not an object or array");
            return Err((
                StatusCode::BAD_REQUEST,
                "Failed to parse the request body as JSON: expected an object or an array",
            )
                .into_response());
        }

        Ok(Self(ContactSubmission::from_json(&body)))
    }
}

/// `application/json`, parameters ignored. Structured-syntax types such as
/// `application/merge-patch+json` are not parsed.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_is_json_content_type() {
        assert!(is_json_content_type(&headers_with("application/json")));
        assert!(is_json_content_type(&headers_with("application/json; charset=utf-8")));
        assert!(is_json_content_type(&headers_with("Application/JSON")));

        assert!(!is_json_content_type(&headers_with("application/merge-patch+json")));
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with("application/x-www-form-urlencoded")));
        assert!(!is_json_content_type(&headers_with("text/json+xml")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn test_extracts_json_body() {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"name":"Afsal","message":"Hello"}"#))
            .unwrap();

        let LenientJson(submission) = LenientJson::from_request(req, &()).await.unwrap();
        assert_eq!(submission.name.as_deref(), Some("Afsal"));
        assert_eq!(submission.email, None);
        assert_eq!(submission.message.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_empty_json_body_is_empty_submission() {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(axum::body::Body::empty())
            .unwrap();

        let LenientJson(submission) = LenientJson::from_request(req, &()).await.unwrap();
        assert_eq!(submission, ContactSubmission::default());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let rejection = LenientJson::from_request(req, &()).await.unwrap_err();
        assert!(rejection.status().is_client_error());
    }

    #[tokio::test]
    async fn test_scalar_top_level_values_are_rejected() {
        for raw in [r#""just a string""#, "7", "null", "true"] {
            let req = axum::http::Request::builder()
                .header(CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(raw))
                .unwrap();

            let rejection = LenientJson::from_request(req, &()).await.unwrap_err();
            assert_eq!(rejection.status(), StatusCode::BAD_REQUEST, "body: {}", raw);
        }
    }

    #[tokio::test]
    async fn test_array_top_level_is_empty_submission() {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from("[1,2]"))
            .unwrap();

        let LenientJson(submission) = LenientJson::from_request(req, &()).await.unwrap();
        assert_eq!(submission, ContactSubmission::default());
    }

    #[tokio::test]
    async fn test_json_suffix_type_is_not_parsed() {
        let req = axum::http::Request::builder()
            .header(CONTENT_TYPE, "application/merge-patch+json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let LenientJson(submission) = LenientJson::from_request(req, &()).await.unwrap();
        assert_eq!(submission, ContactSubmission::default());
    }
}
