// Response interpreter shared by every API call: envelope unwrapping on
// success and meta-based error classification on failure.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiError, ApiResult};

/// The `meta` block carried by every Foursquare response. On errors it holds
/// the machine-readable error type and a human-readable detail message.
#[derive(Debug, Deserialize)]
pub struct Meta {
    pub code: u16,
    #[serde(rename = "errorType")]
    pub error_type: Option<String>,
    #[serde(rename = "errorDetail")]
    pub error_detail: Option<String>,
}

/// Outer wrapper every API response body is nested inside.
#[derive(Debug, Deserialize)]
struct Envelope {
    meta: Option<Meta>,
    response: Option<Value>,
}

/// Parse a 2xx body and return the value of its `response` field.
pub fn parse_envelope(body: &str) -> ApiResult<Value> {
    let envelope: Envelope = serde_json::from_str(body)?;
    envelope
        .response
        .ok_or(ApiError::MissingField { field: "response" })
}

/// Unwrap one named field of an already-unwrapped response value.
pub fn take_field(mut value: Value, field: &'static str) -> ApiResult<Value> {
    match value.get_mut(field) {
        Some(inner) => Ok(inner.take()),
        None => Err(ApiError::MissingField { field }),
    }
}

const DETAIL_TRUNCATE_LEN: usize = 300;

/// Truncate a body for use as an error detail without splitting a
/// multibyte character.
fn truncate_detail(body: &str) -> &str {
    if body.len() <= DETAIL_TRUNCATE_LEN {
        return body;
    }
    let mut end = DETAIL_TRUNCATE_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Build a structured API error from a 400-599 response. Falls back to the
/// raw body when the `meta` block is absent or unparseable.
pub fn classify_error(status: u16, body: &str) -> ApiError {
    if let Ok(Envelope {
        meta: Some(meta), ..
    }) = serde_json::from_str::<Envelope>(body)
    {
        let error_type = meta.error_type.unwrap_or_else(|| "unknown".to_string());
        let detail = meta.error_detail.unwrap_or_default();
        log::warn!("API error {} ({}): {}", meta.code, error_type, detail);
        return ApiError::api(meta.code, &error_type, &detail);
    }

    let truncated = truncate_detail(body);
    log::warn!("API error {} with unparseable body: {}", status, truncated);
    ApiError::api(status, "unknown", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_envelope_unwraps_response() {
        let body = r#"{"meta":{"code":200},"response":{"photo":{"id":"123"}}}"#;
        let response = parse_envelope(body).unwrap();
        assert_eq!(response, json!({"photo": {"id": "123"}}));
    }

    #[test]
    fn test_parse_envelope_rejects_non_json() {
        let result = parse_envelope("<html>not json</html>");
        assert!(matches!(result, Err(ApiError::Json(_))));
    }

    #[test]
    fn test_parse_envelope_rejects_missing_response() {
        let result = parse_envelope(r#"{"meta":{"code":200}}"#);
        assert!(matches!(
            result,
            Err(ApiError::MissingField { field: "response" })
        ));
    }

    #[test]
    fn test_take_field() {
        let value = json!({"photo": {"id": "123", "width": 100}});
        let photo = take_field(value, "photo").unwrap();
        assert_eq!(photo, json!({"id": "123", "width": 100}));
    }

    #[test]
    fn test_take_field_missing() {
        let result = take_field(json!({"checkin": {}}), "photo");
        assert!(matches!(
            result,
            Err(ApiError::MissingField { field: "photo" })
        ));
    }

    #[test]
    fn test_classify_error_reads_meta() {
        let body =
            r#"{"meta":{"code":403,"errorType":"rate_limit_exceeded","errorDetail":"Slow down"}}"#;
        match classify_error(403, body) {
            ApiError::Api {
                code,
                error_type,
                detail,
            } => {
                assert_eq!(code, 403);
                assert_eq!(error_type, "rate_limit_exceeded");
                assert_eq!(detail, "Slow down");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_error_truncates_long_body_on_char_boundary() {
        // Byte 300 lands inside a 3-byte character; truncation must back up
        // to the previous boundary instead of slicing mid-character.
        let body = format!("a{}", "€".repeat(150));
        match classify_error(502, &body) {
            ApiError::Api {
                code,
                error_type,
                detail,
            } => {
                assert_eq!(code, 502);
                assert_eq!(error_type, "unknown");
                assert!(detail.len() <= 300);
                assert_eq!(detail, format!("a{}", "€".repeat(99)));
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_error_falls_back_on_unparseable_body() {
        match classify_error(502, "Bad Gateway") {
            ApiError::Api {
                code,
                error_type,
                detail,
            } => {
                assert_eq!(code, 502);
                assert_eq!(error_type, "unknown");
                assert_eq!(detail, "Bad Gateway");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
