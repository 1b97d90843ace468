//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the segment analytics domain.

mod errors;
mod gender;
mod ids;
mod pagination;

pub use errors::ValidationError;
pub use gender::Gender;
pub use ids::{SegmentId, UserId};
pub use pagination::{Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
