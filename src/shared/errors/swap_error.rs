use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 스왑(토큰/환율) 관련 에러
/// Swap service errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// from 또는 to 파라미터 누락
    /// Missing `from` and/or `to` parameter
    #[error("Both 'from' and 'to' parameters are required")]
    MissingParameter,

    /// 환율 테이블에 없는 쌍
    /// Ordered pair has no entry in the rate table
    #[error("Rate not found for the requested pair")]
    RateNotFound { from: String, to: String },

    /// 네트워크/파싱 실패 (요청 자체는 유효함)
    /// Network or parse failure on an otherwise valid request
    #[error("Transient fetch error: {0}")]
    TransientFetch(String),
}

impl SwapError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SwapError::MissingParameter => StatusCode::BAD_REQUEST,
            SwapError::RateNotFound { .. } => StatusCode::NOT_FOUND,
            SwapError::TransientFetch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// SwapError를 HTTP 응답으로 변환
impl From<SwapError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: SwapError) -> Self {
        (
            err.status_code(),
            Json(json!({
                "error": err.to_string()
            })),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_http_contract() {
        assert_eq!(
            SwapError::MissingParameter.to_string(),
            "Both 'from' and 'to' parameters are required"
        );
        let not_found = SwapError::RateNotFound {
            from: "1".to_string(),
            to: "9".to_string(),
        };
        assert_eq!(not_found.to_string(), "Rate not found for the requested pair");
    }

    #[test]
    fn test_status_mapping() {
        let (status, Json(body)): (StatusCode, Json<serde_json::Value>) =
            SwapError::MissingParameter.into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Both 'from' and 'to' parameters are required");

        let (status, _): (StatusCode, Json<serde_json::Value>) = SwapError::RateNotFound {
            from: "2".to_string(),
            to: "2".to_string(),
        }
        .into();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
