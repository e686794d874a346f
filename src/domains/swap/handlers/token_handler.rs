use crate::domains::swap::models::Token;
use crate::shared::services::AppState;
use axum::{extract::State, Json};

// 토큰 목록 조회 핸들러
// 역할: NestJS의 @Get() 핸들러 같은 것
// Handler: returns the static token catalog (always succeeds)
#[utoipa::path(
    get,
    path = "/api/tokens",
    responses(
        (status = 200, description = "Tokens retrieved successfully", body = [Token])
    ),
    tag = "Tokens"
)]
pub async fn list_tokens(State(app_state): State<AppState>) -> Json<Vec<Token>> {
    // Service 호출 (비즈니스 로직)
    // Call service (business logic)
    let tokens = app_state.swap_state.token_service.list_tokens().await;

    Json(tokens)
}
