//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text_blocking, DocumentKind};
use crate::llm_client::prompts::{JOB_MATCH_PROMPT_TEMPLATE, JOB_MATCH_SYSTEM};
use crate::recommendation::engine::RecommendationReport;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub resume_text: String,
    #[serde(default)]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmJobMatch {
    pub title: String,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmMatchResponse {
    pub top_jobs: Vec<LlmJobMatch>,
}

/// An uploaded resume file pulled out of a multipart body.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/recommendations
///
/// Scores already-extracted resume text. Empty text is scored, not rejected.
pub async fn handle_recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendationReport>, AppError> {
    let filename = request.filename.as_deref().unwrap_or("inline");
    Ok(Json(state.engine.analyze(&request.resume_text, filename)))
}

/// POST /api/v1/resumes/upload (also POST /upload_resume)
///
/// Accepts a multipart `resume_file` (.pdf, .docx, .txt), extracts its text
/// and returns keyword recommendations.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationReport>, AppError> {
    let upload = read_upload(multipart, "resume_file").await?;
    info!("Received resume upload '{}' ({} bytes)", upload.filename, upload.bytes.len());

    let resume_text = extract_text_blocking(upload.filename.clone(), upload.bytes).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Failed to extract text from resume".to_string(),
        ));
    }

    Ok(Json(state.engine.analyze(&resume_text, &upload.filename)))
}

/// POST /api/v1/recommendations/llm
///
/// Sends an uploaded `resume` (.pdf or .docx) to the generative model and
/// returns its suggested titles. Independent of the keyword engine.
pub async fn handle_llm_recommend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<LlmMatchResponse>, AppError> {
    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Unavailable("Generative job matching is not configured".to_string())
    })?;

    let upload = read_upload(multipart, "resume").await?;
    if DocumentKind::from_filename(&upload.filename)? == DocumentKind::Text {
        return Err(AppError::Validation(
            "Invalid file format. Only PDF and DOCX are supported.".to_string(),
        ));
    }

    let resume_text = extract_text_blocking(upload.filename, upload.bytes).await?;
    let prompt = JOB_MATCH_PROMPT_TEMPLATE.replace("{resume_text}", &resume_text);
    let top_jobs: Vec<LlmJobMatch> = llm.call_json(&prompt, JOB_MATCH_SYSTEM).await?;

    Ok(Json(LlmMatchResponse { top_jobs }))
}

/// GET /api/v1/catalog/titles
pub async fn handle_list_titles(State(state): State<AppState>) -> Json<TitlesResponse> {
    Json(TitlesResponse {
        titles: state.engine.catalog().titles().map(String::from).collect(),
    })
}

/// Reads the named file field, skipping any other fields.
async fn read_upload(mut multipart: Multipart, field_name: &str) -> Result<Upload, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(field_name) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("Empty filename".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        return Ok(Upload {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(AppError::Validation("No resume file uploaded".to_string()))
}
