//! PostgreSQL implementation of SegmentReader.
//!
//! Users embed their segment memberships as a `UUID[]` column, mirroring the
//! document shape of the users collection. The per-gender grouping runs in
//! SQL and is folded through [`GenderGroup::merge`], so labels differing only
//! in padding count as one gender here just as they do in memory.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{Gender, Pagination, SegmentId};
use crate::domain::segment::{GenderGroup, Segment};
use crate::ports::{SegmentError, SegmentReader};

/// PostgreSQL implementation of SegmentReader.
#[derive(Clone)]
pub struct PostgresSegmentReader {
    pool: PgPool,
}

impl PostgresSegmentReader {
    /// Creates a new PostgresSegmentReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SegmentReader for PostgresSegmentReader {
    async fn list_segments(&self, pagination: Pagination) -> Result<Vec<Segment>, SegmentError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name FROM segments
            ORDER BY position
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(to_i64(pagination.skip()))
        .bind(to_i64(pagination.limit()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_segment).collect()
    }

    async fn find_segment(&self, id: SegmentId) -> Result<Option<Segment>, SegmentError> {
        let row = sqlx::query(
            r#"
            SELECT id, name FROM segments WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_segment).transpose()
    }

    async fn count_segments(&self) -> Result<u64, SegmentError> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS count FROM segments
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        let count: i64 = row.try_get("count")?;
        Ok(count.max(0) as u64)
    }

    async fn gender_groups(&self, id: SegmentId) -> Result<Vec<GenderGroup>, SegmentError> {
        let rows = sqlx::query(GENDER_GROUPS_SQL)
            .bind(id.as_uuid())
            .fetch_all(&self.pool)
            .await?;

        let groups = rows
            .into_iter()
            .map(row_to_gender_group)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(GenderGroup::merge(groups))
    }
}

/// Per-gender head count and mean income of a segment's users.
///
/// `@>` lets the planner use the GIN index on `segment_ids`; `= ANY` does
/// not. Labels are trimmed before grouping and blank labels are skipped.
const GENDER_GROUPS_SQL: &str = r#"
    SELECT btrim(gender) AS gender,
           COUNT(*) AS user_count,
           AVG(income_level) AS avg_income
    FROM users
    WHERE segment_ids @> ARRAY[$1]::uuid[]
      AND btrim(gender) <> ''
    GROUP BY btrim(gender)
    ORDER BY btrim(gender)
"#;

fn row_to_segment(row: sqlx::postgres::PgRow) -> Result<Segment, SegmentError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let name: String = row.try_get("name")?;
    Ok(Segment::new(SegmentId::from_uuid(id), name))
}

fn row_to_gender_group(row: sqlx::postgres::PgRow) -> Result<GenderGroup, SegmentError> {
    let label: String = row.try_get("gender")?;
    let user_count: i64 = row.try_get("user_count")?;
    let avg_income: Option<f64> = row.try_get("avg_income")?;

    let gender = Gender::new(label)
        .map_err(|e| SegmentError::Store(format!("Invalid gender in users table: {}", e)))?;

    Ok(GenderGroup::new(
        gender,
        user_count.max(0) as u64,
        avg_income.unwrap_or(0.0),
    ))
}

/// Postgres OFFSET/LIMIT take BIGINT.
fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
