use crate::{Error, Result, llm::ChatMessage};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub messages: Option<Value>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u16>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl GenerateRequest {
    /// Lenient normalization: every item becomes a message, substituting
    /// role "user" and empty content where the fields are absent. Role enum
    /// membership is not checked here.
    pub fn normalized_messages(&self) -> Result<Vec<ChatMessage>> {
        let raw = self
            .messages
            .as_ref()
            .ok_or_else(|| Error::invalid_request("Missing messages data"))?;

        let items = raw
            .as_array()
            .ok_or_else(|| Error::invalid_request("Messages must be an array"))?;

        Ok(items
            .iter()
            .map(|item| ChatMessage {
                role: item
                    .get("role")
                    .and_then(Value::as_str)
                    .unwrap_or("user")
                    .to_string(),
                content: item
                    .get("content")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub messages: Option<Value>,
    #[serde(default)]
    pub patient_data: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
}

impl SummaryRequest {
    /// Strict parse: messages must be an array of {role, content} objects.
    pub fn parsed_messages(&self) -> Result<Vec<ChatMessage>> {
        let raw = self
            .messages
            .as_ref()
            .filter(|value| value.is_array())
            .ok_or_else(|| Error::invalid_request("Invalid messages format"))?;

        serde_json::from_value(raw.clone())
            .map_err(|_| Error::invalid_request("Invalid messages format"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(content: String) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
        }
    }

    pub fn error(error: &Error) -> Self {
        Self {
            success: false,
            content: None,
            error: Some(error.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SummaryResponse {
    pub fn ok(summary: String) -> Self {
        Self {
            success: true,
            summary: Some(summary),
            error: None,
        }
    }

    pub fn error(error: &Error) -> Self {
        Self {
            success: false,
            summary: None,
            error: Some(error.to_string()),
        }
    }
}

/// Envelope returned from outside the handlers, e.g. by the auth layer.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &Error) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}
