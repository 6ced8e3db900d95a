pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/v1/catalog/titles", get(handlers::handle_list_titles))
        // Keyword recommendations
        .route(
            "/api/v1/recommendations",
            post(handlers::handle_recommend),
        )
        .route(
            "/api/v1/resumes/upload",
            post(handlers::handle_upload_resume),
        )
        // Legacy upload path kept for existing clients
        .route("/upload_resume", post(handlers::handle_upload_resume))
        // Generative matching
        .route(
            "/api/v1/recommendations/llm",
            post(handlers::handle_llm_recommend),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::SkillCatalog;
    use crate::config::Config;
    use crate::recommendation::engine::RecommendationEngine;

    const BOUNDARY: &str = "X-RECOMMENDER-BOUNDARY";

    fn test_app() -> Router {
        let engine = RecommendationEngine::new(Arc::new(SkillCatalog::builtin())).unwrap();
        build_router(AppState {
            engine,
            llm: None,
            config: Config::default(),
        })
    }

    fn multipart_request(uri: &str, field: &str, filename: &str, content: &[u8]) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_titles() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/catalog/titles")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["titles"].as_array().unwrap().len(), 39);
        assert_eq!(body["titles"][0], "Data Scientist");
    }

    #[tokio::test]
    async fn test_recommend_from_text() {
        let request_body = json!({
            "resume_text": "Experienced Python developer building REST API microservices with AWS, Docker, and Git, doing full stack web development",
            "filename": "resume.pdf"
        });
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(request_body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["recommendations"][0]["job_title"], "Software Engineer");
        let jobs = body["formatted_recommendations"]["jobRecommendations"]
            .as_array()
            .unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0]["company"], "Tech Innovations");
    }

    #[tokio::test]
    async fn test_recommend_empty_text_is_scored() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/recommendations")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(json!({"resume_text": ""}).to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["extracted_skills"], json!([]));
        assert_eq!(body["recommendations"][0]["confidence"], 0.5);
    }

    #[tokio::test]
    async fn test_upload_text_resume() {
        let request = multipart_request(
            "/upload_resume",
            "resume_file",
            "resume.txt",
            b"Go developer and DevOps engineer: docker, kubernetes, terraform, jenkins",
        );
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["recommendations"][0]["job_title"], "DevOps Engineer");
        let skills = body["extracted_skills"].as_array().unwrap();
        assert!(skills.iter().any(|s| s == "go"));
    }

    #[tokio::test]
    async fn test_upload_missing_field() {
        let request = multipart_request("/api/v1/resumes/upload", "other", "resume.txt", b"text");
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "No resume file uploaded"})
        );
    }

    #[tokio::test]
    async fn test_upload_empty_filename() {
        let request = multipart_request("/api/v1/resumes/upload", "resume_file", "", b"text");
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "Empty filename"}));
    }

    #[tokio::test]
    async fn test_upload_unsupported_format() {
        let request = multipart_request("/api/v1/resumes/upload", "resume_file", "cv.odt", b"text");
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_blank_text_is_unprocessable() {
        let request = multipart_request("/api/v1/resumes/upload", "resume_file", "cv.txt", b"   ");
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Failed to extract text from resume"})
        );
    }

    #[tokio::test]
    async fn test_llm_endpoint_unavailable_without_key() {
        let request = multipart_request("/api/v1/recommendations/llm", "resume", "cv.pdf", b"%PDF");
        let response = test_app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
