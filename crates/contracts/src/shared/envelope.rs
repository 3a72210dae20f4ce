//! Response envelope shared by every endpoint of the remote API.
//!
//! Success: `{ success: true, data: <payload>, total?, page?, pages?, count? }`
//! Failure: `{ success: false, message: <text>, reason? }` with a 4xx/5xx status.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Human-readable failure text, falling back to a generic message.
    pub fn error_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "Request failed".to_string())
    }
}
