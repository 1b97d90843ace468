//! GetSegmentGenderDataHandler - Query handler for a segment's gender breakdown.

use std::sync::Arc;

use crate::domain::foundation::SegmentId;
use crate::domain::segment::{gender_breakdown, SegmentGenderData};
use crate::ports::{SegmentError, SegmentReader};

use super::SegmentQuerySettings;

/// Query for the gender breakdown of one segment.
#[derive(Debug, Clone, Copy)]
pub struct GetSegmentGenderDataQuery {
    pub segment_id: SegmentId,
}

/// Handler for the per-gender user share of a segment.
///
/// Unknown segments are reported as not found; known segments without users
/// yield an empty breakdown.
pub struct GetSegmentGenderDataHandler {
    reader: Arc<dyn SegmentReader>,
    settings: SegmentQuerySettings,
}

impl GetSegmentGenderDataHandler {
    pub fn new(reader: Arc<dyn SegmentReader>, settings: SegmentQuerySettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(
        &self,
        query: GetSegmentGenderDataQuery,
    ) -> Result<Vec<SegmentGenderData>, SegmentError> {
        self.settings
            .bounded(self.reader.find_segment(query.segment_id))
            .await?
            .ok_or(SegmentError::NotFound(query.segment_id))?;

        let groups = self
            .settings
            .bounded(self.reader.gender_groups(query.segment_id))
            .await?;

        Ok(gender_breakdown(&groups))
    }
}
