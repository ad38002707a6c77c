use serde::{Deserialize, Serialize};

use crate::storage::Scheme;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// JSON envelope returned for every request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Scheme>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme_id: Option<String>,
}

impl Response {
    pub fn eligible(sender: &str, schemes: Vec<Scheme>) -> Self {
        Self {
            sender: Some(sender.to_string()),
            status: Status::Success,
            data: Some(schemes),
            message: None,
            scheme_id: None,
        }
    }

    pub fn learned(sender: &str, scheme_id: String) -> Self {
        Self {
            sender: Some(sender.to_string()),
            status: Status::Success,
            data: None,
            message: Some(format!("New scheme learned successfully. ID: {}", scheme_id)),
            scheme_id: Some(scheme_id),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            sender: None,
            status: Status::Error,
            data: None,
            message: Some(message.into()),
            scheme_id: None,
        }
    }

    /// Render as indented JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            serde_json::json!({ "status": "error", "message": e.to_string() }).to_string()
        })
    }
}
