//! Candidate Ranking — pluggable, trait-based ranker over submitted candidates.
//!
//! Default: `TfidfRanker` (normalize → TF-IDF → softmax fit → predict → pick).
//! `AppState` holds an `Arc<dyn CandidateRanker>`, swappable at startup.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::candidate::CandidateRecord;
use crate::ranking::model::SoftmaxRegression;
use crate::ranking::text::normalize;
use crate::ranking::vectorizer::TfidfVectorizer;

/// Output of one ranking pass over the current candidate batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    /// Predicted experience per candidate, aligned with input order.
    pub scores: Vec<u32>,
    /// First index of the maximal predicted value.
    pub best_index: usize,
    /// The selected best candidate (a copy, never a mutation of the input).
    pub best: CandidateRecord,
}

/// The ranker trait. Implement this to swap ranking backends without touching
/// the admin handler.
///
/// Callers must guard the empty case: `rank` is only defined for a non-empty
/// slice, and the web layer skips the core entirely when no candidates exist.
#[async_trait]
pub trait CandidateRanker: Send + Sync {
    async fn rank(&self, candidates: &[CandidateRecord]) -> Result<RankingResult, AppError>;
}

/// Default ranker: per-batch TF-IDF features, a softmax classifier fit on the
/// candidates' own declared experience, predictions from that same model.
///
/// The model is deliberately trained and evaluated on the same rows — the
/// "prediction" is the model's best in-sample fit, recomputed from scratch on
/// every call. Nothing is cached, so results depend only on the current batch.
pub struct TfidfRanker;

#[async_trait]
impl CandidateRanker for TfidfRanker {
    async fn rank(&self, candidates: &[CandidateRecord]) -> Result<RankingResult, AppError> {
        rank_candidates(candidates)
    }
}

/// The full ranking pipeline. Synchronous and pure: reads the input slice,
/// returns a fresh result, touches nothing else.
pub fn rank_candidates(candidates: &[CandidateRecord]) -> Result<RankingResult, AppError> {
    debug_assert!(!candidates.is_empty(), "caller must guard the empty case");

    let corpus: Vec<String> = candidates.iter().map(|c| normalize(&c.skills)).collect();

    let mut vectorizer = TfidfVectorizer::new();
    vectorizer.fit(&corpus);
    if vectorizer.vocabulary_size() == 0 {
        return Err(AppError::EmptyVocabulary);
    }

    let features: Vec<Vec<f64>> = corpus.iter().map(|doc| vectorizer.transform(doc)).collect();
    let targets: Vec<u32> = candidates.iter().map(|c| c.experience_years).collect();

    let model = SoftmaxRegression::fit(&features, &targets)?;
    let scores: Vec<u32> = features.iter().map(|f| model.predict(f)).collect();

    // First index of the maximum — ties break toward insertion order.
    let best_index = scores
        .iter()
        .enumerate()
        .fold(0, |best, (i, &s)| if s > scores[best] { i } else { best });

    Ok(RankingResult {
        best: candidates[best_index].clone(),
        best_index,
        scores,
    })
}
