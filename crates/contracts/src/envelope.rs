use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::API_VERSION;

// ============================================================================
// Error taxonomy
// ============================================================================

/// Machine-readable error code carried by failure envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "ERROR")]
    Error,
    #[serde(rename = "FETCH_ERROR")]
    FetchError,
    #[serde(rename = "POST_ERROR")]
    PostError,
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
    #[serde(rename = "UNAUTHORIZED")]
    Unauthorized,
    #[serde(rename = "UPSTREAM_ERROR")]
    Upstream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: ErrorCode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl Meta {
    fn stamp() -> Self {
        Self {
            timestamp: Utc::now(),
            version: API_VERSION.to_string(),
        }
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Uniform response wrapper returned by every service call.
///
/// Invariant: every accessor call produces exactly one envelope and a caller
/// never sees a raw error. `data` is populated on success; on a missed lookup
/// the envelope is still a success with `data: None` and a descriptive
/// message, so callers that need to distinguish absence must go through
/// [`Envelope::into_outcome`] rather than checking `success` alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    pub meta: Meta,
}

impl<T> Envelope<T> {
    /// Success envelope with the default `"Success"` message.
    pub fn success(data: T) -> Self {
        Self::success_with_message(data, "Success")
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            meta: Meta::stamp(),
        }
    }

    /// Missed lookup: a success envelope carrying no data.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            meta: Meta::stamp(),
        }
    }

    pub fn error(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(ErrorInfo { code }),
            meta: Meta::stamp(),
        }
    }

    /// Collapse the envelope into a discriminated outcome.
    pub fn into_outcome(self) -> Outcome<T> {
        if !self.success {
            let code = self.error.map(|e| e.code).unwrap_or(ErrorCode::Error);
            return Outcome::Failed(code, self.message);
        }
        match self.data {
            Some(data) => Outcome::Found(data),
            None => Outcome::NotFound,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
            error: self.error,
            meta: self.meta,
        }
    }
}

/// Typed view over an envelope for callers that must not confuse a missed
/// lookup with a transport failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Found(T),
    NotFound,
    Failed(ErrorCode, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_carries_data_unchanged() {
        let env = Envelope::success(vec![1, 2, 3]);
        assert!(env.success);
        assert_eq!(env.message, "Success");
        assert_eq!(env.data, Some(vec![1, 2, 3]));
        assert!(env.error.is_none());
        assert_eq!(env.meta.version, API_VERSION);
    }

    #[test]
    fn not_found_is_a_success_without_data() {
        let env: Envelope<String> = Envelope::not_found("Product not found");
        assert!(env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "Product not found");
        assert_eq!(env.into_outcome(), Outcome::NotFound);
    }

    #[test]
    fn error_envelope_exposes_code() {
        let env: Envelope<()> = Envelope::error("boom", ErrorCode::FetchError);
        assert!(!env.success);
        assert_eq!(env.error, Some(ErrorInfo { code: ErrorCode::FetchError }));
        match env.into_outcome() {
            Outcome::Failed(code, message) => {
                assert_eq!(code, ErrorCode::FetchError);
                assert_eq!(message, "boom");
            }
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn error_codes_use_screaming_snake_on_the_wire() {
        let json = serde_json::to_string(&ErrorCode::FetchError).unwrap();
        assert_eq!(json, "\"FETCH_ERROR\"");
        let json = serde_json::to_string(&ErrorCode::Validation).unwrap();
        assert_eq!(json, "\"VALIDATION_ERROR\"");
    }

    #[test]
    fn envelope_round_trips_through_json() {
        let env = Envelope::success_with_message(42u32, "answer");
        let json = serde_json::to_string(&env).unwrap();
        let back: Envelope<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.data, Some(42));
        assert_eq!(back.message, "answer");
    }
}
