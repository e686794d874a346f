// Swap domain routes
// 스왑 도메인 라우터
use axum::{routing::get, Router};
use crate::domains::swap::handlers::{rate_handler, token_handler};
use crate::shared::services::AppState;

/// Create tokens router
/// 토큰 라우터 생성
pub fn create_tokens_router() -> Router<AppState> {
    Router::new()
        .route("/", get(token_handler::list_tokens))
}

/// Create rates router
/// 환율 라우터 생성
pub fn create_rates_router() -> Router<AppState> {
    Router::new()
        .route("/", get(rate_handler::get_rate))
}
