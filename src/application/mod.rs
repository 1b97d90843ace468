//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Queries (read) and the update command are kept in separate handlers.

pub mod handlers;

pub use handlers::{
    CountSegmentsHandler, GetSegmentGenderDataHandler, GetSegmentGenderDataQuery,
    GetSegmentHandler, GetSegmentQuery, ListSegmentMetadataHandler, ListSegmentMetadataQuery,
    ListSegmentMetadataResult, SegmentQuerySettings, UpdateSegmentCommand, UpdateSegmentHandler,
};
