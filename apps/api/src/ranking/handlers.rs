use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::ranking::ranker::RankingResult;
use crate::state::AppState;

/// Admin ranking view payload. `ranking` is absent (with an explanatory
/// `message`) when there is nothing to rank or the batch cannot be fit.
#[derive(Debug, Serialize)]
pub struct RankingResponse {
    pub candidates: Vec<CandidateRecord>,
    pub ranking: Option<RankingResult>,
    pub message: Option<String>,
}

/// GET /api/v1/ranking
///
/// Takes a snapshot of the candidate list; with zero candidates the core is
/// never invoked and an empty state renders instead. Data-quality failures
/// from the fit (too little target variation, no usable text) come back as a
/// friendly message rather than an error status — they are expected states of
/// a half-filled candidate pool, not faults.
pub async fn handle_ranking(
    State(state): State<AppState>,
) -> Result<Json<RankingResponse>, AppError> {
    let candidates = state.candidates.snapshot().await;

    if candidates.is_empty() {
        return Ok(Json(RankingResponse {
            candidates,
            ranking: None,
            message: Some("No candidates submitted yet".to_string()),
        }));
    }

    match state.ranker.rank(&candidates).await {
        Ok(ranking) => {
            info!(
                candidates = candidates.len(),
                best = %ranking.best.name,
                "ranking computed"
            );
            Ok(Json(RankingResponse {
                candidates,
                ranking: Some(ranking),
                message: None,
            }))
        }
        Err(e @ (AppError::InsufficientData(_) | AppError::EmptyVocabulary)) => {
            warn!(candidates = candidates.len(), "ranking not possible: {e}");
            Ok(Json(RankingResponse {
                candidates,
                ranking: None,
                message: Some(format!("Not enough data to rank candidates yet: {e}")),
            }))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::candidates::store::CandidateStore;
    use crate::config::Config;
    use crate::ranking::ranker::{CandidateRanker, TfidfRanker};

    fn make_state(ranker: Arc<dyn CandidateRanker>) -> AppState {
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                upload_dir: std::env::temp_dir(),
                max_upload_bytes: 1024,
            },
            candidates: CandidateStore::new(),
            ranker,
        }
    }

    fn make_candidate(name: &str, skills: &str, experience_years: u32) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            resume_file: format!("{name}_cv.pdf"),
            skills: skills.to_string(),
            experience_years,
            submitted_at: Utc::now(),
        }
    }

    /// Counts invocations so tests can assert the empty-store guard.
    struct CountingRanker(AtomicUsize);

    #[async_trait]
    impl CandidateRanker for CountingRanker {
        async fn rank(&self, candidates: &[CandidateRecord]) -> Result<RankingResult, AppError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            TfidfRanker.rank(candidates).await
        }
    }

    #[tokio::test]
    async fn test_empty_store_never_invokes_the_ranker() {
        let counter = Arc::new(CountingRanker(AtomicUsize::new(0)));
        let state = make_state(counter.clone());

        let response = handle_ranking(State(state)).await.unwrap();
        assert!(response.0.candidates.is_empty());
        assert!(response.0.ranking.is_none());
        assert!(response.0.message.is_some());
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_rankable_batch_returns_result() {
        let state = make_state(Arc::new(TfidfRanker));
        state
            .candidates
            .append(make_candidate("junior", "python java", 2))
            .await;
        state
            .candidates
            .append(make_candidate("senior", "python java sql", 5))
            .await;

        let response = handle_ranking(State(state)).await.unwrap();
        let ranking = response.0.ranking.expect("batch should be rankable");
        assert_eq!(ranking.best.name, "senior");
        assert!(response.0.message.is_none());
    }

    #[tokio::test]
    async fn test_unfittable_batch_degrades_to_message() {
        let state = make_state(Arc::new(TfidfRanker));
        // One candidate: a single target class cannot be fit.
        state
            .candidates
            .append(make_candidate("only", "rust tokio", 4))
            .await;

        let response = handle_ranking(State(state)).await.unwrap();
        assert_eq!(response.0.candidates.len(), 1);
        assert!(response.0.ranking.is_none());
        let message = response.0.message.expect("expected friendly message");
        assert!(message.contains("Not enough data"));
    }
}
