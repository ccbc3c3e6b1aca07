//! Error types for API calls.
//!
//! Every failure is eventually surfaced to the store as a human-readable
//! message, so the `Display` output of each variant is what users see.

use thiserror::Error;

/// Message recorded when a payload does not have the expected shape.
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format";

/// Errors that can occur while talking to the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The configured base URL cannot carry path segments.
    #[error("Invalid API base URL '{url}'")]
    InvalidBaseUrl { url: String },

    /// Failed to reach the server or read its response.
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    ///
    /// `from_server` is false when the body carried no usable message and
    /// `message` is the generic status line.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        from_server: bool,
    },

    /// An authenticated call was attempted without a session token.
    #[error("No token found")]
    MissingCredential,

    /// The response body did not match the expected shape.
    #[error("{reason}")]
    MalformedResponse { reason: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(source: reqwest::Error) -> Self {
        ApiError::Transport { source }
    }
}

impl ApiError {
    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidBaseUrl { .. } => "invalid_base_url",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "http_status",
            ApiError::MissingCredential => "missing_credential",
            ApiError::MalformedResponse { .. } => "malformed_response",
        }
    }

    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message the server itself supplied, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message,
                from_server: true,
                ..
            } => Some(message),
            _ => None,
        }
    }

    pub(crate) fn unexpected_format() -> Self {
        ApiError::MalformedResponse {
            reason: UNEXPECTED_FORMAT.to_string(),
        }
    }

    /// Build a status error from a non-2xx response body.
    ///
    /// Prefers a top-level `message` string, then the first entry of the
    /// `errors` map (`{"errors": {"body": ["can't be empty"]}}` becomes
    /// `"body can't be empty"`), then a generic status line.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| server_message(&value))
        {
            Some(message) => ApiError::Status {
                status,
                message,
                from_server: true,
            },
            None => ApiError::Status {
                status,
                message: format!("HTTP error! status: {}", status),
                from_server: false,
            },
        }
    }
}

fn server_message(value: &serde_json::Value) -> Option<String> {
    if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
        if !message.is_empty() {
            return Some(message.to_string());
        }
    }

    let errors = value.get("errors")?.as_object()?;
    let (field, detail) = errors.iter().next()?;
    let detail = match detail {
        serde_json::Value::Array(items) => items.first()?.as_str()?.to_string(),
        serde_json::Value::String(s) => s.clone(),
        _ => return None,
    };
    Some(format!("{} {}", field, detail))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_prefers_server_message() {
        let err = ApiError::from_status(404, r#"{"message": "Profile not found"}"#);
        assert_eq!(err.to_string(), "Profile not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.server_message(), Some("Profile not found"));
        assert_eq!(err.error_type(), "http_status");
    }

    #[test]
    fn status_reads_realworld_errors_map() {
        let err = ApiError::from_status(422, r#"{"errors": {"body": ["can't be empty"]}}"#);
        assert_eq!(err.to_string(), "body can't be empty");
    }

    #[test]
    fn status_falls_back_to_generic_line() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn missing_credential_message() {
        assert_eq!(ApiError::MissingCredential.to_string(), "No token found");
        assert_eq!(ApiError::MissingCredential.status(), None);
    }

    #[test]
    fn unexpected_format_message() {
        assert_eq!(ApiError::unexpected_format().to_string(), UNEXPECTED_FORMAT);
    }
}
