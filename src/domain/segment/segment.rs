//! Segment and user records as held by the document store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Gender, SegmentId, UserId};

/// A named grouping that users can belong to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "_id")]
    pub id: SegmentId,
    pub name: String,
}

impl Segment {
    pub fn new(id: SegmentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A user row from the users collection.
///
/// Segment membership is embedded in the user: `segment_ids` lists every
/// segment the user belongs to, possibly none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentUser {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub gender: Gender,
    pub income_level: f64,
    #[serde(default)]
    pub segment_ids: Vec<SegmentId>,
}

impl SegmentUser {
    pub fn new(gender: Gender, income_level: f64, segment_ids: Vec<SegmentId>) -> Self {
        Self {
            id: UserId::new(),
            gender,
            income_level,
            segment_ids,
        }
    }

    /// Whether this user references the given segment.
    pub fn belongs_to(&self, segment_id: &SegmentId) -> bool {
        self.segment_ids.contains(segment_id)
    }
}
