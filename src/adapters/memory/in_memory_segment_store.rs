//! In-Memory Segment Store Adapter
//!
//! Holds segments and users in process memory with the same read semantics
//! as the PostgreSQL reader. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Pagination, SegmentId};
use crate::domain::segment::{GenderGroup, Segment, SegmentUser};
use crate::ports::{SegmentError, SegmentReader};

/// In-memory segments and users collections.
#[derive(Debug, Clone, Default)]
pub struct InMemorySegmentStore {
    segments: Arc<RwLock<Vec<Segment>>>,
    users: Arc<RwLock<Vec<SegmentUser>>>,
}

impl InMemorySegmentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment; insertion order is page order
    pub async fn insert_segment(&self, segment: Segment) {
        self.segments.write().await.push(segment);
    }

    /// Append a user
    pub async fn insert_user(&self, user: SegmentUser) {
        self.users.write().await.push(user);
    }

    /// Append many users at once
    pub async fn insert_users(&self, users: impl IntoIterator<Item = SegmentUser>) {
        self.users.write().await.extend(users);
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.segments.write().await.clear();
        self.users.write().await.clear();
    }

    /// Get the number of stored users
    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl SegmentReader for InMemorySegmentStore {
    async fn list_segments(&self, pagination: Pagination) -> Result<Vec<Segment>, SegmentError> {
        let segments = self.segments.read().await;
        let skip = usize::try_from(pagination.skip()).unwrap_or(usize::MAX);
        let limit = usize::try_from(pagination.limit()).unwrap_or(usize::MAX);
        Ok(segments.iter().skip(skip).take(limit).cloned().collect())
    }

    async fn find_segment(&self, id: SegmentId) -> Result<Option<Segment>, SegmentError> {
        let segments = self.segments.read().await;
        Ok(segments.iter().find(|s| s.id == id).cloned())
    }

    async fn count_segments(&self) -> Result<u64, SegmentError> {
        Ok(self.segments.read().await.len() as u64)
    }

    async fn gender_groups(&self, id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError> {
        let users = self.users.read().await;
        Ok(GenderGroup::collect(users.iter(), &id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Gender;

    fn gender(label: &str) -> Gender {
        Gender::new(label).unwrap()
    }

    async fn store_with_segments(n: usize) -> (InMemorySegmentStore, Vec<Segment>) {
        let store = InMemorySegmentStore::new();
        let mut segments = Vec::new();
        for i in 0..n {
            let segment = Segment::new(SegmentId::new(), format!("Segment {}", i));
            store.insert_segment(segment.clone()).await;
            segments.push(segment);
        }
        (store, segments)
    }

    #[tokio::test]
    async fn list_segments_returns_requested_window() {
        let (store, segments) = store_with_segments(12).await;

        let page = store.list_segments(Pagination::new(2, 5)).await.unwrap();

        assert_eq!(page.len(), 5);
        assert_eq!(page, segments[5..10].to_vec());
    }

    #[tokio::test]
    async fn list_segments_last_page_is_partial() {
        let (store, segments) = store_with_segments(12).await;

        let page = store.list_segments(Pagination::new(3, 5)).await.unwrap();

        assert_eq!(page, segments[10..12].to_vec());
    }

    #[tokio::test]
    async fn list_segments_past_end_is_empty() {
        let (store, _) = store_with_segments(3).await;
        let page = store.list_segments(Pagination::new(9, 5)).await.unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn find_segment_returns_none_when_missing() {
        let (store, segments) = store_with_segments(2).await;

        assert_eq!(
            store.find_segment(segments[1].id).await.unwrap(),
            Some(segments[1].clone())
        );
        assert!(store.find_segment(SegmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn count_segments_counts_all_pages() {
        let (store, _) = store_with_segments(7).await;
        assert_eq!(store.count_segments().await.unwrap(), 7);
    }

    #[tokio::test]
    async fn gender_groups_aggregates_members() {
        let (store, segments) = store_with_segments(1).await;
        let s1 = segments[0].id;
        store
            .insert_users(vec![
                SegmentUser::new(gender("M"), 100.0, vec![s1]),
                SegmentUser::new(gender("F"), 200.0, vec![s1]),
                SegmentUser::new(gender("F"), 300.0, vec![s1]),
                SegmentUser::new(gender("F"), 900.0, vec![]),
            ])
            .await;

        let groups = store.gender_groups(s1).await.unwrap();

        assert_eq!(
            groups,
            vec![
                GenderGroup::new(gender("F"), 2, 250.0),
                GenderGroup::new(gender("M"), 1, 100.0),
            ]
        );
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let (store, _) = store_with_segments(2).await;
        store
            .insert_user(SegmentUser::new(gender("M"), 1.0, vec![]))
            .await;

        store.clear().await;

        assert_eq!(store.count_segments().await.unwrap(), 0);
        assert_eq!(store.user_count().await, 0);
    }
}
