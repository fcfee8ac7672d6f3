//! Standardized API error body.

use serde::{Deserialize, Serialize};

/// Every failed request is answered with a JSON object carrying a `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn not_found() -> Self {
        Self::new("Not Found")
    }

    /// Detail stays in the server logs.
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_message_object() {
        let body = serde_json::to_value(ErrorResponse::not_found()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Not Found" }));

        let body = serde_json::to_value(ErrorResponse::internal_error()).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Internal server error" }));
    }
}
