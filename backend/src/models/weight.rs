//! Weight sample model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

/// A stored weight reading. The surrogate row id stays internal to the
/// table and is never part of this shape.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeightRecord {
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NewWeight {
    pub weight: f64,
}

impl WeightRecord {
    /// Insert a reading stamped with the current server time.
    /// No validation on sign or magnitude.
    pub async fn append(pool: &SqlitePool, weight: f64) -> Result<Self, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            INSERT INTO weights (weight, timestamp)
            VALUES ($1, $2)
            RETURNING weight, timestamp
            "#,
        )
        .bind(weight)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
    }

    /// All readings, newest first
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            "SELECT weight, timestamp FROM weights ORDER BY timestamp DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Readings with timestamp inclusively within [start, end], newest first.
    /// Result size is unbounded.
    pub async fn list_between(
        pool: &SqlitePool,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, WeightRecord>(
            r#"
            SELECT weight, timestamp
            FROM weights
            WHERE timestamp BETWEEN $1 AND $2
            ORDER BY timestamp DESC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    #[cfg(test)]
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM weights")
            .fetch_one(pool)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::run_migrations(&pool).await.unwrap();
        pool
    }

    async fn insert_at(pool: &SqlitePool, weight: f64, ts: DateTime<Utc>) {
        sqlx::query("INSERT INTO weights (weight, timestamp) VALUES ($1, $2)")
            .bind(weight)
            .bind(ts)
            .execute(pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn append_then_list_includes_sample() {
        let pool = test_pool().await;

        let before = Utc::now();
        let stored = WeightRecord::append(&pool, 3.25).await.unwrap();
        let after = Utc::now();

        assert_eq!(stored.weight, 3.25);
        assert!(stored.timestamp >= before && stored.timestamp <= after);

        let all = WeightRecord::list_all(&pool).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].weight, 3.25);
    }

    #[tokio::test]
    async fn list_all_is_descending() {
        let pool = test_pool().await;
        let t0 = Utc.timestamp_opt(100, 0).unwrap();
        let t1 = Utc.timestamp_opt(200, 0).unwrap();
        let t2 = Utc.timestamp_opt(300, 0).unwrap();

        // Insert out of timestamp order
        insert_at(&pool, 2.0, t1).await;
        insert_at(&pool, 1.0, t0).await;
        insert_at(&pool, 1.5, t2).await;

        let all = WeightRecord::list_all(&pool).await.unwrap();
        let weights: Vec<f64> = all.iter().map(|r| r.weight).collect();
        assert_eq!(weights, vec![1.5, 2.0, 1.0]);
    }

    #[tokio::test]
    async fn list_between_is_inclusive() {
        let pool = test_pool().await;
        let t0 = Utc.timestamp_opt(100, 0).unwrap();
        let t1 = Utc.timestamp_opt(200, 0).unwrap();
        let t2 = Utc.timestamp_opt(300, 0).unwrap();

        insert_at(&pool, 1.0, t0).await;
        insert_at(&pool, 2.0, t1).await;
        insert_at(&pool, 1.5, t2).await;

        let rows = WeightRecord::list_between(&pool, t0, t2).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].weight, 1.5);

        // Single-point range
        let rows = WeightRecord::list_between(&pool, t1, t1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].weight, 2.0);

        // Empty range
        let rows = WeightRecord::list_between(&pool, t2, t0).await.unwrap();
        assert!(rows.is_empty());
    }
}
