use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use lexlens::analysis::handlers::handle_analyze;
use lexlens::analysis::loopholes::LoopholeScanner;
use lexlens::analysis::upload::{UploadConfig, MAX_UPLOAD_BYTES};
use lexlens::auth::handlers::{
    handle_auth_error, handle_auth_log, handle_auth_providers, handle_auth_signin,
};
use lexlens::retrieval::engine::RetrievalEngine;
use lexlens::retrieval::handlers::handle_analyze_dispute;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

const FRONTEND_ORIGIN: &str = "http://localhost:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut uploads_dir = PathBuf::from("./uploads");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--uploads" => {
                uploads_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--uploads <dir>]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    std::fs::create_dir_all(&uploads_dir)?;

    // 1. Shared state, built once before the server starts:
    let scanner = Arc::new(LoopholeScanner::new());
    let retrieval = Arc::new(RetrievalEngine::new());
    let uploads = Arc::new(UploadConfig::new(uploads_dir.clone()));

    tracing::info!(
        "Retrieval engine ready: {} reference sentences indexed",
        retrieval.corpus().len()
    );
    tracing::info!("Uploads directory: {}", uploads_dir.display());

    // 2. CORS for the Next.js frontend:
    let cors = CorsLayer::new()
        .allow_origin(FRONTEND_ORIGIN.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // 3. HTTP Router:
    let app = Router::new()
        .route(
            "/analyze",
            post(handle_analyze).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/analyze-dispute", post(handle_analyze_dispute))
        .route("/auth/providers", get(handle_auth_providers))
        .route("/auth/error", get(handle_auth_error))
        .route("/auth/_log", post(handle_auth_log))
        .route("/auth/signin", get(handle_auth_signin))
        .layer(Extension(scanner))
        .layer(Extension(retrieval))
        .layer(Extension(uploads))
        .layer(cors);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
