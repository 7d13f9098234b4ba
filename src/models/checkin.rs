use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Checkin {
    pub id: Uuid,
    pub member_id: Option<Uuid>, // nullable: the scanned phone may match nobody
    pub phone_number_scanned: String,
    pub member_name: String,
    pub subscribed_class: Option<String>,
    pub requested_class: String,
    pub status: String, // "accepted", "expired", "not_allowed", "invalid", "not_found", "error"
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct CreateCheckinData {
    pub member_id: Option<Uuid>,
    pub phone_number_scanned: String,
    pub member_name: String,
    pub subscribed_class: Option<String>,
    pub requested_class: String,
    pub status: String,
}

impl Checkin {
    /// Records a check-in attempt
    pub async fn create(pool: &PgPool, data: CreateCheckinData) -> Result<Self, sqlx::Error> {
        let checkin = sqlx::query_as::<_, Checkin>(
            r#"
            INSERT INTO checkins (member_id, phone_number_scanned, member_name, subscribed_class, requested_class, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(data.member_id)
        .bind(data.phone_number_scanned)
        .bind(data.member_name)
        .bind(data.subscribed_class)
        .bind(data.requested_class)
        .bind(data.status)
        .fetch_one(pool)
        .await?;

        Ok(checkin)
    }

    /// List recent check-in attempts, newest first
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let checkins = sqlx::query_as::<_, Checkin>(
            r#"
            SELECT * FROM checkins
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(checkins)
    }

    /// Total number of recorded attempts
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM checkins
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
