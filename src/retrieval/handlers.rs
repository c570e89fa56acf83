use super::engine::RetrievalEngine;
use super::rules::{suggest_resolution, ETHICAL_RECOMMENDATIONS};
use super::types::{DisputeAnalysis, DisputeRequest, DisputeResponse};
use crate::analysis::types::ApiError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_analyze_dispute(
    Extension(engine): Extension<Arc<RetrievalEngine>>,
    Json(req): Json<DisputeRequest>,
) -> Response {
    let (Some(claimant), Some(respondent)) = (req.claimant_arguments, req.respondent_arguments)
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::bad_request("Missing required arguments")),
        )
            .into_response();
    };

    let claimant_argument = claimant.joined();
    let respondent_argument = respondent.joined();

    let claimant_refs = engine.retrieve_legal_references(&claimant_argument);
    let respondent_refs = engine.retrieve_legal_references(&respondent_argument);

    let resolution = suggest_resolution(
        &claimant_argument,
        &claimant_refs,
        &respondent_argument,
        &respondent_refs,
    );

    tracing::debug!(
        "Dispute analyzed: {} claimant refs, {} respondent refs",
        claimant_refs.len(),
        respondent_refs.len()
    );

    (
        StatusCode::OK,
        Json(DisputeResponse {
            status: "success".to_string(),
            analysis: DisputeAnalysis {
                claimant_legal_references: claimant_refs,
                respondent_legal_references: respondent_refs,
                suggested_resolution: resolution,
                ethical_recommendations: ETHICAL_RECOMMENDATIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            },
        }),
    )
        .into_response()
}
