//! Segment query and command handlers.

mod count_segments;
mod get_segment;
mod get_segment_gender_data;
mod list_segment_metadata;
mod settings;
mod update_segment;

#[cfg(test)]
pub(crate) mod testing;

pub use count_segments::CountSegmentsHandler;
pub use get_segment::{GetSegmentHandler, GetSegmentQuery};
pub use get_segment_gender_data::{GetSegmentGenderDataHandler, GetSegmentGenderDataQuery};
pub use list_segment_metadata::{
    ListSegmentMetadataHandler, ListSegmentMetadataQuery, ListSegmentMetadataResult,
};
pub use settings::SegmentQuerySettings;
pub use update_segment::{UpdateSegmentCommand, UpdateSegmentHandler};
