//! CountSegmentsHandler - Query handler for the number of segments overall.
//!
//! Pagination controls need the full row count, which the segment list's
//! `totalCount` (rows on the current page) does not provide.

use std::sync::Arc;

use crate::ports::{SegmentError, SegmentReader};

use super::SegmentQuerySettings;

/// Handler counting every stored segment.
pub struct CountSegmentsHandler {
    reader: Arc<dyn SegmentReader>,
    settings: SegmentQuerySettings,
}

impl CountSegmentsHandler {
    pub fn new(reader: Arc<dyn SegmentReader>, settings: SegmentQuerySettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(&self) -> Result<u64, SegmentError> {
        self.settings.bounded(self.reader.count_segments()).await
    }
}
