use super::types::{
    AuthErrorResponse, AuthLogResponse, ProvidersResponse, SignInParams, SignInResponse,
};
use axum::extract::Query;
use axum::Json;

pub async fn handle_auth_providers() -> Json<ProvidersResponse> {
    Json(ProvidersResponse { providers: vec![] })
}

pub async fn handle_auth_error() -> Json<AuthErrorResponse> {
    Json(AuthErrorResponse {
        error: "Authentication error".to_string(),
    })
}

pub async fn handle_auth_log() -> Json<AuthLogResponse> {
    Json(AuthLogResponse {
        status: "logged".to_string(),
    })
}

pub async fn handle_auth_signin(Query(params): Query<SignInParams>) -> Json<SignInResponse> {
    Json(SignInResponse {
        providers: vec![],
        callback_url: params.callback_url.unwrap_or_default(),
    })
}
