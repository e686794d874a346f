use thiserror::Error;

/// 마켓 설정(토큰/환율 테이블) 검증 에러
/// Market configuration validation errors
#[derive(Error, Debug, PartialEq)]
pub enum MarketConfigError {
    #[error("Duplicate token id: {id}")]
    DuplicateTokenId { id: String },

    #[error("Token id must not be empty or contain '-': {id:?}")]
    InvalidTokenId { id: String },

    /// 키는 반드시 "{from}-{to}" 형식
    #[error("Invalid rate key {key:?}, expected \"{{from}}-{{to}}\"")]
    InvalidRateKey { key: String },

    #[error("Rate for {key} must be positive and finite, got {rate}")]
    InvalidRate { key: String, rate: f64 },
}
