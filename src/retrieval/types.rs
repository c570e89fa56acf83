use serde::{Deserialize, Serialize};

/// A party's arguments: either a single string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arguments {
    Many(Vec<String>),
    One(String),
}

impl Arguments {
    /// Collapse into one query string (lists joined with single spaces).
    pub fn joined(&self) -> String {
        match self {
            Self::Many(parts) => parts.join(" "),
            Self::One(text) => text.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeRequest {
    #[serde(default)]
    pub claimant_arguments: Option<Arguments>,
    #[serde(default)]
    pub respondent_arguments: Option<Arguments>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeAnalysis {
    pub claimant_legal_references: Vec<String>,
    pub respondent_legal_references: Vec<String>,
    pub suggested_resolution: String,
    pub ethical_recommendations: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DisputeResponse {
    pub status: String,
    pub analysis: DisputeAnalysis,
}
