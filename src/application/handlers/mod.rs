//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod segment;

pub use segment::{
    CountSegmentsHandler, GetSegmentGenderDataHandler, GetSegmentGenderDataQuery,
    GetSegmentHandler, GetSegmentQuery, ListSegmentMetadataHandler, ListSegmentMetadataQuery,
    ListSegmentMetadataResult, SegmentQuerySettings, UpdateSegmentCommand, UpdateSegmentHandler,
};
