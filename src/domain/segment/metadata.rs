//! Per-segment summary row shown in the segment list.

use serde::Serialize;

use crate::domain::foundation::{Gender, SegmentId};

use super::gender_group::ranked;
use super::{GenderGroup, Segment};

/// Aggregate statistics for one segment's users.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentMetaData {
    #[serde(rename = "_id")]
    pub id: SegmentId,
    pub name: String,
    /// Total users referencing the segment.
    pub user_count: u64,
    /// Mean of the per-gender mean incomes.
    ///
    /// This is an average of averages, not weighted by group size: a
    /// segment with one low earner of one gender and many high earners of
    /// another reports the midpoint of the two group means.
    pub avg_income: f64,
    /// Gender with the largest head count; ties go to the alphabetically first.
    pub top_gender: Gender,
}

impl SegmentMetaData {
    /// Reduces a segment's gender groups into one summary row.
    ///
    /// Returns `None` when no user references the segment.
    pub fn from_groups(segment: &Segment, groups: &[GenderGroup]) -> Option<Self> {
        let ranked = ranked(groups);
        let top = ranked.first()?;

        let user_count = ranked.iter().map(|g| g.user_count).sum();
        let avg_income =
            ranked.iter().map(|g| g.avg_income).sum::<f64>() / ranked.len() as f64;

        Some(Self {
            id: segment.id,
            name: segment.name.clone(),
            user_count,
            avg_income,
            top_gender: top.gender.clone(),
        })
    }
}
