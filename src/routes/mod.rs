// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use crate::shared::services::AppState;

// 각 도메인의 routes import
use crate::domains::swap::routes::{create_rates_router, create_tokens_router};

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/tokens", create_tokens_router())
        .nest("/api/rates", create_rates_router())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Create application with state and request logging
/// 상태 주입 + 요청 로그 레이어 (CORS/Swagger는 main에서 추가)
pub fn create_app(app_state: AppState) -> Router {
    create_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
