//! GetSegmentHandler - Query handler for a single segment.

use std::sync::Arc;

use crate::domain::foundation::SegmentId;
use crate::domain::segment::Segment;
use crate::ports::{SegmentError, SegmentReader};

use super::SegmentQuerySettings;

/// Query to get a segment by ID.
#[derive(Debug, Clone, Copy)]
pub struct GetSegmentQuery {
    pub segment_id: SegmentId,
}

/// Handler for retrieving a single segment.
pub struct GetSegmentHandler {
    reader: Arc<dyn SegmentReader>,
    settings: SegmentQuerySettings,
}

impl GetSegmentHandler {
    pub fn new(reader: Arc<dyn SegmentReader>, settings: SegmentQuerySettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(&self, query: GetSegmentQuery) -> Result<Segment, SegmentError> {
        self.settings
            .bounded(self.reader.find_segment(query.segment_id))
            .await?
            .ok_or(SegmentError::NotFound(query.segment_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySegmentStore;
    use crate::application::handlers::segment::testing::{seed_segments, FailingSegmentReader};

    #[tokio::test]
    async fn test_returns_existing_segment() {
        let store = InMemorySegmentStore::new();
        let segments = seed_segments(&store, 3).await;
        let handler = GetSegmentHandler::new(Arc::new(store), SegmentQuerySettings::default());

        let segment = handler
            .handle(GetSegmentQuery {
                segment_id: segments[1].id,
            })
            .await
            .unwrap();

        assert_eq!(segment, segments[1]);
    }

    #[tokio::test]
    async fn test_missing_segment_is_not_found() {
        let store = InMemorySegmentStore::new();
        seed_segments(&store, 1).await;
        let handler = GetSegmentHandler::new(Arc::new(store), SegmentQuerySettings::default());
        let missing = SegmentId::new();

        let result = handler.handle(GetSegmentQuery { segment_id: missing }).await;

        match result {
            Err(SegmentError::NotFound(id)) => assert_eq!(id, missing),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_propagates_store_errors() {
        let handler =
            GetSegmentHandler::new(Arc::new(FailingSegmentReader), SegmentQuerySettings::default());

        let result = handler
            .handle(GetSegmentQuery {
                segment_id: SegmentId::new(),
            })
            .await;

        assert!(matches!(result, Err(SegmentError::Store(_))));
    }
}
