use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use bytes::Bytes;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::candidates::storage::{load_resume, store_resume};
use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::state::AppState;

/// POST /api/v1/candidates
///
/// Multipart submission form: `name`, `skills`, `experience` (text fields)
/// and `resume` (file). The file is stored opaquely; only the text fields
/// ever reach the ranking core.
pub async fn handle_submit(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<CandidateRecord>), AppError> {
    let mut name: Option<String> = None;
    let mut skills: Option<String> = None;
    let mut experience: Option<String> = None;
    let mut resume: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart payload: {e}")))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => name = Some(read_text(field).await?),
            "skills" => skills = Some(read_text(field).await?),
            "experience" => experience = Some(read_text(field).await?),
            "resume" => {
                let original = field.file_name().unwrap_or("resume").to_string();
                let payload = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("failed to read resume: {e}")))?;
                resume = Some((original, payload));
            }
            _ => {} // unknown fields are ignored
        }
    }

    let name = require_nonempty(name, "name")?;
    let skills = require_nonempty(skills, "skills")?;
    let experience_years = require_nonempty(experience, "experience")?
        .parse::<u32>()
        .map_err(|_| {
            AppError::Validation("'experience' must be a non-negative integer".to_string())
        })?;
    let (original_filename, payload) = resume
        .ok_or_else(|| AppError::Validation("missing file field 'resume'".to_string()))?;

    let resume_file = store_resume(&state.config.upload_dir, &name, &original_filename, &payload)
        .await?;

    let record = CandidateRecord {
        id: Uuid::new_v4(),
        name,
        resume_file,
        skills,
        experience_years,
        submitted_at: Utc::now(),
    };
    state.candidates.append(record.clone()).await;

    let total = state.candidates.len().await;
    info!(candidate = %record.id, total, "candidate submission accepted");

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/candidates
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRecord>>, AppError> {
    Ok(Json(state.candidates.snapshot().await))
}

/// GET /api/v1/resumes/:filename
///
/// Serves a stored resume back by its stored name. Contents stay opaque —
/// always `application/octet-stream`.
pub async fn handle_resume(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bytes = load_resume(&state.config.upload_dir, &filename).await?;
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    let name = field.name().unwrap_or_default().to_string();
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("failed to read field '{name}': {e}")))
}

fn require_nonempty(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(AppError::Validation(format!("missing field '{field}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_nonempty_trims() {
        assert_eq!(
            require_nonempty(Some("  Ana ".to_string()), "name").unwrap(),
            "Ana"
        );
    }

    #[test]
    fn test_require_nonempty_rejects_missing_and_blank() {
        assert!(matches!(
            require_nonempty(None, "name").unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(matches!(
            require_nonempty(Some("   ".to_string()), "skills").unwrap_err(),
            AppError::Validation(_)
        ));
    }
}
