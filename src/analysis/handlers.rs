use super::loopholes::LoopholeScanner;
use super::summarizer::summarize;
use super::types::{AnalyzeMetadata, AnalyzeResponse, ApiError};
use super::upload::{sanitize_filename, TempUpload, UploadConfig};
use crate::extraction::types::DocumentKind;
use axum::body::Bytes;
use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

pub async fn handle_analyze(
    Extension(uploads): Extension<Arc<UploadConfig>>,
    Extension(scanner): Extension<Arc<LoopholeScanner>>,
    multipart: Multipart,
) -> Response {
    let (filename, bytes) = match read_file_field(multipart).await {
        Ok(part) => part,
        Err(response) => return response,
    };

    let Some(kind) = DocumentKind::from_filename(&filename) else {
        return bad_request("Unsupported file type. Only PDF and DOCX are allowed.");
    };

    let safe_name = sanitize_filename(&filename);
    let upload = match TempUpload::write(uploads.dir(), &safe_name, &bytes).await {
        Ok(upload) => upload,
        Err(err) => {
            tracing::error!("Failed to persist upload {}: {}", safe_name, err);
            return internal_error(err.to_string());
        }
    };

    // The TempUpload guard removes the file when this scope ends, success or
    // failure alike.
    let text = match crate::extraction::extract(upload.path(), kind) {
        Ok(text) => text,
        Err(err) => {
            tracing::error!("Extraction failed for {}: {}", safe_name, err);
            return internal_error(err.to_string());
        }
    };

    let summary = summarize(&text);
    let loopholes = scanner.scan(&text);

    tracing::info!(
        "Analyzed {} ({} chars extracted, {} loopholes)",
        safe_name,
        text.len(),
        loopholes.len()
    );

    (
        StatusCode::OK,
        Json(AnalyzeResponse {
            status: "success".to_string(),
            summary,
            loopholes,
            metadata: AnalyzeMetadata {
                filename: safe_name,
                file_type: kind.label().to_string(),
                date_analyzed: chrono::Local::now().to_rfc3339(),
            },
        }),
    )
        .into_response()
}

/// Walk the multipart stream until the `file` field shows up and read it.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), Response> {
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some("file") {
                    continue;
                }

                let filename = field.file_name().unwrap_or_default().to_string();
                if filename.is_empty() {
                    return Err(bad_request("No file selected for uploading"));
                }

                let bytes = match field.bytes().await {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        tracing::error!("Failed to read upload body: {}", err);
                        return Err(internal_error(err.to_string()));
                    }
                };
                return Ok((filename, bytes));
            }
            Ok(None) => return Err(bad_request("No file part in the request")),
            Err(err) => return Err(bad_request(err.to_string())),
        }
    }
}

fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::bad_request(message)),
    )
        .into_response()
}

fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::internal(message)),
    )
        .into_response()
}
