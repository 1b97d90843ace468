//! Segment analytics domain.
//!
//! Pure aggregation over a segment's users: the per-gender grouping stage,
//! the summary row reduction, and the gender percentage breakdown.

mod gender_breakdown;
mod gender_group;
mod metadata;
mod segment;

pub use gender_breakdown::{gender_breakdown, SegmentGenderData};
pub use gender_group::GenderGroup;
pub use metadata::SegmentMetaData;
pub use segment::{Segment, SegmentUser};
