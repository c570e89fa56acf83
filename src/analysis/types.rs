use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub status: String,
    pub summary: String,
    pub loopholes: Vec<String>,
    pub metadata: AnalyzeMetadata,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMetadata {
    pub filename: String,
    pub file_type: String,
    pub date_analyzed: String,
}

/// JSON error body shared by all handlers. Validation failures carry just the
/// message; internal failures also carry `"status": "error"`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: Some("error".to_string()),
        }
    }
}
