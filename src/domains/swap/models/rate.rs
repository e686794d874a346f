use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 환율 조회 API 요청 파라미터
// Note: 두 파라미터 모두 Option - 누락 시 400을 직접 내려주기 위함
//       (Query 추출기가 알아서 거절하면 응답 형식이 달라짐)
// utoipa::IntoParams: 쿼리 파라미터로 사용하기 위한 trait
#[derive(Debug, Default, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[schema(as = RateRequest)]
pub struct RateRequest {
    /// Source token id
    /// 보내는 토큰 ID
    #[param(example = "1")]
    #[schema(example = "1")]
    pub from: Option<String>,

    /// Destination token id
    /// 받는 토큰 ID
    #[param(example = "2")]
    #[schema(example = "2")]
    pub to: Option<String>,
}

// 환율 조회 API 응답 모델
// rate: `from` 1단위당 `to` 수량
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(as = RateResponse)]
pub struct RateResponse {
    #[schema(example = 1800.0)]
    pub rate: f64,
}

// 에러 응답 모델 (400/404 공통)
// Error response body shared by 400/404
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ErrorResponse)]
pub struct ErrorResponse {
    #[schema(example = "Rate not found for the requested pair")]
    pub error: String,
}
