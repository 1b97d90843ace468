//! HTTP adapter for segment endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{SegmentApiError, SegmentAppState};
pub use routes::segment_router;
