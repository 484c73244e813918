use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One applicant's submission. Immutable once appended to the store.
///
/// `resume_file` is the stored filename of the uploaded resume; the file is
/// kept opaque and its contents never reach the ranking core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    /// Submitted display name. Not guaranteed unique.
    pub name: String,
    pub resume_file: String,
    /// Free-form skills text, the only input to feature extraction.
    pub skills: String,
    pub experience_years: u32,
    pub submitted_at: DateTime<Utc>,
}
