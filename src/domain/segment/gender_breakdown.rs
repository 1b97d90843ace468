//! Gender share of a segment's users.

use serde::Serialize;

use crate::domain::foundation::Gender;

use super::gender_group::ranked;
use super::GenderGroup;

/// One gender's slice of a segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentGenderData {
    #[serde(rename = "_id")]
    pub gender: Gender,
    pub user_count: u64,
    /// Share of the segment's users, 0 to 100.
    pub user_percentage: f64,
}

/// Computes the gender breakdown from a segment's gender groups.
///
/// One record per gender present, largest first. A segment without users
/// has no breakdown, so the result is empty rather than a division by zero.
pub fn gender_breakdown(groups: &[GenderGroup]) -> Vec<SegmentGenderData> {
    let ranked = ranked(groups);
    let total: u64 = ranked.iter().map(|g| g.user_count).sum();
    if total == 0 {
        return Vec::new();
    }

    ranked
        .into_iter()
        .map(|g| SegmentGenderData {
            gender: g.gender.clone(),
            user_count: g.user_count,
            user_percentage: g.user_count as f64 / total as f64 * 100.0,
        })
        .collect()
}
