use crate::domains::swap::models::{RateRequest, RateResponse};
use crate::shared::errors::SwapError;
use crate::shared::services::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

// 환율 조회 핸들러
// Handler: looks up the rate for the ordered (from, to) pair
// Note: 파라미터 누락(400) / 없는 쌍(404) 모두 {"error": "..."} 형식
#[utoipa::path(
    get,
    path = "/api/rates",
    params(RateRequest),
    responses(
        (status = 200, description = "Rate retrieved successfully", body = RateResponse),
        (status = 400, description = "Missing 'from' or 'to' parameter", body = crate::domains::swap::models::ErrorResponse),
        (status = 404, description = "Rate not found for the requested pair", body = crate::domains::swap::models::ErrorResponse)
    ),
    tag = "Rates"
)]
pub async fn get_rate(
    State(app_state): State<AppState>,
    Query(params): Query<RateRequest>,
) -> Result<Json<RateResponse>, (StatusCode, Json<serde_json::Value>)> {
    // Service 호출 (비즈니스 로직)
    // Call service (business logic)
    let rate = app_state
        .swap_state
        .rate_service
        .get_rate(params.from.as_deref(), params.to.as_deref())
        .await
        .map_err(|e: SwapError| {
            tracing::warn!(from = ?params.from, to = ?params.to, "Rate lookup failed: {}", e);
            e
        })?;

    Ok(Json(RateResponse { rate }))
}
