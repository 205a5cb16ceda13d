//! Shared handling for service responses.

use http::StatusCode;
use serde::Deserialize;

use crate::error::PlumeError;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull a human-readable message out of an error response body.
///
/// Services answer failures with `{"message": ..}` (internal API) or
/// `{"error": .., "message": ..}` (XRPC). Anything else falls back to the
/// status reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(m), ..
        }) if !m.is_empty() => m,
        Ok(ErrorBody { error: Some(e), .. }) if !e.is_empty() => e,
        _ => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_owned(),
    }
}

/// Turn a non-success response into [`PlumeError::Status`].
pub async fn error_for_response(response: reqwest::Response) -> PlumeError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);
    tracing::debug!(status = status.as_u16(), %message, "service returned an error");
    PlumeError::status(status, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_message_field() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":"InvalidRequest","message":"record too large"}"#,
        );
        assert_eq!(msg, "record too large");
    }

    #[test]
    fn falls_back_to_error_then_reason() {
        assert_eq!(
            error_message(StatusCode::UNAUTHORIZED, r#"{"error":"ExpiredToken"}"#),
            "ExpiredToken"
        );
        assert_eq!(
            error_message(StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>"),
            "Service Unavailable"
        );
    }
}
