// Candidate ranking core.
// Pipeline: normalize → vectorize → fit → predict → select. Stateless and
// request-scoped; every call refits from the exact batch it is handed.

pub mod handlers;
pub mod model;
pub mod ranker;
pub mod text;
pub mod vectorizer;
