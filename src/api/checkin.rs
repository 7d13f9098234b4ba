use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::models::checkin::Checkin;
use crate::services::eligibility::CheckinOutcome;

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub phone_number: String,
    pub session_class: String,
}

#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CheckinHistoryResponse {
    pub checkins: Vec<Checkin>,
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

/// Validates a kiosk scan against the member directory and the class
/// eligibility rules. Every attempt is recorded, including rejected ones.
async fn post_checkin(
    State(state): State<AppState>,
    Json(req): Json<CheckinRequest>,
) -> Result<Json<CheckinOutcome>> {
    if req.phone_number.trim().is_empty() {
        return Err(AppError::Validation("Phone number missing".to_string()));
    }
    if req.session_class.trim().is_empty() {
        return Err(AppError::Validation("Session class missing".to_string()));
    }

    let today = Utc::now().date_naive();
    let outcome = state
        .checkin
        .handle(&req.phone_number, &req.session_class, today)
        .await;

    // Business rejections and backend failures both come back as a 200
    // with the outcome payload; the kiosk renders the message and color
    Ok(Json(outcome))
}

/// Recent check-in attempts for the front desk, newest first
async fn list_checkins(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<CheckinHistoryResponse>> {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(50).clamp(1, 200);
    let offset = (page - 1) * per_page;

    let checkins = Checkin::list_recent(&state.pool, per_page, offset).await?;
    let total = Checkin::count(&state.pool).await?;

    Ok(Json(CheckinHistoryResponse {
        checkins,
        page,
        per_page,
        total,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/checkin", post(post_checkin))
        .route("/checkins", get(list_checkins))
}
