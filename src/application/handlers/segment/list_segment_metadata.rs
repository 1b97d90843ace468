//! ListSegmentMetadataHandler - Query handler for the paged segment list.
//!
//! Each segment on the page is summarized by its own grouping query. The
//! lookups run concurrently and are reassembled in page order.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

use crate::domain::foundation::Pagination;
use crate::domain::segment::{Segment, SegmentMetaData};
use crate::ports::{SegmentError, SegmentReader};

use super::SegmentQuerySettings;

/// Query for one page of segment summaries.
#[derive(Debug, Clone, Copy)]
pub struct ListSegmentMetadataQuery {
    pub pagination: Pagination,
}

/// A page of segment summaries.
#[derive(Debug, Clone)]
pub struct ListSegmentMetadataResult {
    /// Summaries in page order; segments without users are omitted.
    pub segments: Vec<SegmentMetaData>,
    /// Rows on this page, not the number of segments overall.
    pub total_count: usize,
}

/// Handler for the paged segment list.
pub struct ListSegmentMetadataHandler {
    reader: Arc<dyn SegmentReader>,
    settings: SegmentQuerySettings,
}

impl ListSegmentMetadataHandler {
    pub fn new(reader: Arc<dyn SegmentReader>, settings: SegmentQuerySettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(
        &self,
        query: ListSegmentMetadataQuery,
    ) -> Result<ListSegmentMetadataResult, SegmentError> {
        let page = self
            .settings
            .bounded(self.reader.list_segments(query.pagination))
            .await?;

        let fanout = self.settings.fanout_for(page.len());
        let rows: Vec<Option<SegmentMetaData>> = stream::iter((0..page.len()).map(|i| self.summarize(&page[i])))
            .buffered(fanout)
            .try_collect()
            .await?;

        let segments: Vec<SegmentMetaData> = rows.into_iter().flatten().collect();

        debug!(
            page = query.pagination.page(),
            limit = query.pagination.limit(),
            fetched = page.len(),
            returned = segments.len(),
            "Segment metadata page computed"
        );

        let total_count = segments.len();
        Ok(ListSegmentMetadataResult {
            segments,
            total_count,
        })
    }

    async fn summarize(&self, segment: &Segment) -> Result<Option<SegmentMetaData>, SegmentError> {
        let groups = self
            .settings
            .bounded(self.reader.gender_groups(segment.id))
            .await?;
        Ok(SegmentMetaData::from_groups(segment, &groups))
    }
}
