use sqlx::PgPool;

use crate::models::checkin::{Checkin, CreateCheckinData};

/// Fire-and-forget audit trail of check-in attempts.
#[derive(Clone)]
pub struct CheckinAudit {
    pool: PgPool,
}

impl CheckinAudit {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records an attempt. The outcome has already been decided when
    /// this runs, so a failure here is logged and swallowed; it must
    /// not change what the kiosk displays.
    pub async fn record(&self, data: CreateCheckinData) {
        if let Err(e) = Checkin::create(&self.pool, data).await {
            tracing::error!(error = %e, "Failed to record check-in attempt");
        }
    }
}
