// API module - HTTP endpoints

use sqlx::PgPool;

use crate::services::checkin::CheckinService;

pub mod checkin;
pub mod health;

/// Shared application state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub checkin: CheckinService,
}
