//! Route configuration for segment endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    count_segments, get_segment, get_segment_gender_data, list_segments, update_segment,
    SegmentAppState,
};

/// Creates the segment router, to be nested under `/api`.
///
/// Routes:
/// - `GET /segments?page=&limit=` - Paged segment summaries
/// - `GET /segments/count` - Number of segments overall
/// - `GET /segments/:id` - Single segment
/// - `PUT /segments/:id` - Segment update (not implemented)
/// - `GET /segments/:id/gender-data` - Gender breakdown of a segment
pub fn segment_router() -> Router<SegmentAppState> {
    Router::new()
        .route("/segments", get(list_segments))
        .route("/segments/count", get(count_segments))
        .route("/segments/:id", get(get_segment).put(update_segment))
        .route("/segments/:id/gender-data", get(get_segment_gender_data))
}
