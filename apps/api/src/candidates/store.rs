use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::candidate::CandidateRecord;

/// Append-only, in-process candidate list. Lost on restart by design — this
/// service has no durable storage.
///
/// The ranking core never sees this type: handlers take a `snapshot()` and
/// pass the resulting owned sequence in as a plain slice, so a `rank` call
/// always operates on a stable view even while submissions keep arriving.
#[derive(Clone, Default)]
pub struct CandidateStore {
    inner: Arc<RwLock<Vec<CandidateRecord>>>,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, record: CandidateRecord) {
        self.inner.write().await.push(record);
    }

    /// Cloned copy of the current list, in insertion order.
    pub async fn snapshot(&self) -> Vec<CandidateRecord> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_record(name: &str) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            resume_file: format!("{name}_cv.pdf"),
            skills: "rust axum".to_string(),
            experience_years: 3,
            submitted_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let store = CandidateStore::new();
        store.append(make_record("ana")).await;
        store.append(make_record("bruno")).await;
        store.append(make_record("carla")).await;

        let snapshot = store.snapshot().await;
        let names: Vec<&str> = snapshot.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["ana", "bruno", "carla"]);
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached_from_store() {
        let store = CandidateStore::new();
        store.append(make_record("ana")).await;

        let snapshot = store.snapshot().await;
        store.append(make_record("bruno")).await;

        // A snapshot taken before the second append must not grow.
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = CandidateStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.snapshot().await.is_empty());
    }
}
