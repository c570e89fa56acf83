use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub providers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthLogResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SignInParams {
    #[serde(rename = "callbackUrl")]
    pub callback_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub providers: Vec<String>,
    pub callback_url: String,
}
