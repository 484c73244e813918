//! Local-filesystem storage for uploaded resume files.
//!
//! Files are stored opaquely under the configured upload directory as
//! `{submitter name}_{original filename}`, both components sanitized. Nothing
//! here (or anywhere else) reads resume contents.

use std::path::Path;

use crate::errors::AppError;

/// Reduces a user-supplied path component to a safe filename fragment:
/// alphanumerics, `.`, `-` and `_` pass through, whitespace collapses to `_`,
/// everything else (separators, parent refs, control chars) is dropped.
pub fn sanitize_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
            out.push(c);
        } else if c.is_whitespace() && !out.ends_with('_') {
            out.push('_');
        }
    }
    // A filename of only dots would escape the upload dir when joined.
    let trimmed = out.trim_matches('.');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Stored filename for a submission: `{name}_{original}`, sanitized.
pub fn stored_filename(name: &str, original: &str) -> String {
    format!(
        "{}_{}",
        sanitize_component(name),
        sanitize_component(original)
    )
}

/// Writes the uploaded payload under `upload_dir` and returns the stored
/// filename the record should carry.
pub async fn store_resume(
    upload_dir: &Path,
    name: &str,
    original_filename: &str,
    payload: &[u8],
) -> Result<String, AppError> {
    let filename = stored_filename(name, original_filename);
    tokio::fs::create_dir_all(upload_dir).await?;
    tokio::fs::write(upload_dir.join(&filename), payload).await?;
    Ok(filename)
}

/// Reads a previously stored file back by its stored name.
/// Rejects anything that could leave the upload directory.
pub async fn load_resume(upload_dir: &Path, stored_name: &str) -> Result<Vec<u8>, AppError> {
    if stored_name.contains('/') || stored_name.contains('\\') || stored_name.contains("..") {
        return Err(AppError::Validation(format!(
            "invalid resume filename '{stored_name}'"
        )));
    }

    match tokio::fs::read(upload_dir.join(stored_name)).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AppError::NotFound(format!(
            "Resume '{stored_name}' not found"
        ))),
        Err(e) => Err(AppError::Storage(e)),
    }
}
