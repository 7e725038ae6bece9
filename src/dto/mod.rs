//! Serializable payloads returned by the JSON API.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health probe body carrying the instant the request was served.
#[derive(Clone, Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub deployment: &'static str,
}

impl HealthStatus {
    /// Snapshot of a healthy service at the current UTC time.
    pub fn now() -> Self {
        Self {
            status: "ok",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            version: env!("CARGO_PKG_VERSION"),
            deployment: "serverless",
        }
    }
}

/// Placeholder body served while page content delivery is unimplemented.
#[derive(Clone, Debug, Serialize)]
pub struct PageContent {
    pub content: &'static str,
    pub message: &'static str,
    pub status: &'static str,
}

impl PageContent {
    pub fn placeholder() -> Self {
        Self {
            content: "Page content API endpoint",
            message: "This endpoint will provide page content for AJAX updates",
            status: "placeholder",
        }
    }
}

/// Outcome of an authentication attempt.
#[derive(Clone, Debug, Serialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: &'static str,
    pub note: &'static str,
}

impl AuthOutcome {
    /// The stub outcome: credential verification is not wired up.
    pub fn unimplemented() -> Self {
        Self {
            success: false,
            message: "Authentication not fully implemented yet",
            note: "This is a placeholder for serverless authentication",
        }
    }
}

/// Structured error body for API responses.
#[derive(Clone, Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
}

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            error: "endpoint not found",
        }
    }

    pub fn method_not_allowed() -> Self {
        Self {
            error: "method not allowed",
        }
    }
}
