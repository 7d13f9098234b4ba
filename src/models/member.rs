use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A membership record. Rows are written by the external roster sync;
/// this service treats the table as read-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: Uuid,
    pub phone_number: String,
    pub name: String,
    /// Calendar date, not an instant. The expiry day itself still counts
    /// as active.
    pub membership_expiry_date: Option<NaiveDate>,
    pub subscribed_class: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Finds a member by phone number. Phone numbers are unique, so at
    /// most one row comes back.
    pub async fn find_by_phone(
        pool: &PgPool,
        phone_number: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let member = sqlx::query_as::<_, Self>(
            r#"
            SELECT * FROM members WHERE phone_number = $1
            "#,
        )
        .bind(phone_number)
        .fetch_optional(pool)
        .await?;

        Ok(member)
    }
}
