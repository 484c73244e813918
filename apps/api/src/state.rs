use std::sync::Arc;

use crate::candidates::store::CandidateStore;
use crate::config::Config;
use crate::ranking::ranker::CandidateRanker;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Append-only in-process candidate list. No persistence: restart wipes it.
    pub candidates: CandidateStore,
    /// Pluggable ranker. Default: TfidfRanker.
    pub ranker: Arc<dyn CandidateRanker>,
}
