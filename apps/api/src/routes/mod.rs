pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::get,
    Router,
};

use crate::candidates::handlers as candidates;
use crate::ranking::handlers as ranking;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Submission intake + listing
        .route(
            "/api/v1/candidates",
            get(candidates::handle_list).post(candidates::handle_submit),
        )
        // Stored resume files, served opaquely
        .route("/api/v1/resumes/:filename", get(candidates::handle_resume))
        // Admin ranking view
        .route("/api/v1/ranking", get(ranking::handle_ranking))
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::candidates::store::CandidateStore;
    use crate::config::Config;
    use crate::ranking::ranker::TfidfRanker;

    fn test_router() -> Router {
        test_router_with_upload_dir(std::env::temp_dir())
    }

    fn test_router_with_upload_dir(upload_dir: std::path::PathBuf) -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                upload_dir,
                max_upload_bytes: 1024 * 1024,
            },
            candidates: CandidateStore::new(),
            ranker: Arc::new(TfidfRanker),
        })
    }

    /// Minimal multipart form body for the submission endpoint.
    fn multipart_submission(boundary: &str) -> String {
        let mut body = String::new();
        for (name, value) in [("name", "Ana"), ("skills", "python sql"), ("experience", "4")] {
            body.push_str(&format!(
                "--{boundary}\r\ncontent-disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!(
            "--{boundary}\r\ncontent-disposition: form-data; name=\"resume\"; \
             filename=\"cv.pdf\"\r\ncontent-type: application/pdf\r\n\r\n%PDF-1.4 fake\r\n"
        ));
        body.push_str(&format!("--{boundary}--\r\n"));
        body
    }

    #[tokio::test]
    async fn test_health_endpoint_responds_ok() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ranking_endpoint_renders_empty_state() {
        let response = test_router()
            .oneshot(Request::get("/api/v1/ranking").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["candidates"].as_array().unwrap().is_empty());
        assert!(body["ranking"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_resume_is_404() {
        let response = test_router()
            .oneshot(
                Request::get("/api/v1/resumes/missing.pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_submit_accepts_multipart_form() {
        let dir = tempfile::tempdir().unwrap();
        let boundary = "test-boundary-7a3f";
        let response = test_router_with_upload_dir(dir.path().to_path_buf())
            .oneshot(
                Request::post("/api/v1/candidates")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(multipart_submission(boundary)))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let record: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(record["name"], "Ana");
        assert_eq!(record["experience_years"], 4);
        assert_eq!(record["resume_file"], "Ana_cv.pdf");
        assert!(dir.path().join("Ana_cv.pdf").exists());
    }

    #[tokio::test]
    async fn test_submit_rejects_non_multipart() {
        let response = test_router()
            .oneshot(
                Request::post("/api/v1/candidates")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_ne!(response.status(), StatusCode::CREATED);
    }
}
