//! Per-gender grouping of a segment's users.
//!
//! This is the first aggregation stage shared by every segment report: the
//! users that reference a segment, bucketed by gender with a head count and
//! mean income per bucket. Stores may compute it natively (SQL `GROUP BY`)
//! or through [`GenderGroup::collect`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::foundation::{Gender, SegmentId};

use super::SegmentUser;

/// Users of one gender within one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderGroup {
    pub gender: Gender,
    pub user_count: u64,
    pub avg_income: f64,
}

impl GenderGroup {
    pub fn new(gender: Gender, user_count: u64, avg_income: f64) -> Self {
        Self {
            gender,
            user_count,
            avg_income,
        }
    }

    /// Groups the users referencing `segment_id` by gender.
    ///
    /// Output is ordered by gender ascending.
    pub fn collect<'a, I>(users: I, segment_id: &SegmentId) -> Vec<GenderGroup>
    where
        I: IntoIterator<Item = &'a SegmentUser>,
    {
        let mut buckets: BTreeMap<&Gender, (u64, f64)> = BTreeMap::new();
        for user in users.into_iter().filter(|u| u.belongs_to(segment_id)) {
            let entry = buckets.entry(&user.gender).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += user.income_level;
        }

        buckets
            .into_iter()
            .map(|(gender, (count, income_sum))| {
                GenderGroup::new(gender.clone(), count, income_sum / count as f64)
            })
            .collect()
    }

    /// Folds groups that carry the same gender into one.
    ///
    /// Mean incomes are recombined weighted by head count, so merging the
    /// pieces of a split group yields the group it was split from. Output is
    /// ordered by gender ascending; empty groups are dropped.
    pub fn merge<I>(groups: I) -> Vec<GenderGroup>
    where
        I: IntoIterator<Item = GenderGroup>,
    {
        let mut buckets: BTreeMap<Gender, (u64, f64)> = BTreeMap::new();
        for group in groups.into_iter().filter(|g| g.user_count > 0) {
            let entry = buckets.entry(group.gender).or_insert((0, 0.0));
            entry.0 += group.user_count;
            entry.1 += group.avg_income * group.user_count as f64;
        }

        buckets
            .into_iter()
            .map(|(gender, (count, income_sum))| {
                GenderGroup::new(gender, count, income_sum / count as f64)
            })
            .collect()
    }
}

/// Orders non-empty groups by head count descending.
///
/// The sort is stable over a gender-ascending base order, so equal counts
/// resolve to the alphabetically first gender regardless of how the store
/// returned them.
pub(crate) fn ranked(groups: &[GenderGroup]) -> Vec<&GenderGroup> {
    let mut ranked: Vec<&GenderGroup> = groups.iter().filter(|g| g.user_count > 0).collect();
    ranked.sort_by(|a, b| a.gender.cmp(&b.gender));
    ranked.sort_by(|a, b| b.user_count.cmp(&a.user_count));
    ranked
}
