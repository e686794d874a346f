use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 거래 가능한 토큰
// 역할: 카탈로그에 등록된 토큰 하나 (불변, 서버 제공)
// Token: a tradeable asset with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(as = Token)]
pub struct Token {
    /// Unique token identifier
    /// 토큰 ID (카탈로그 내 유일)
    #[schema(example = "1")]
    pub id: String,

    /// Ticker symbol
    /// 심볼
    #[schema(example = "ETH")]
    pub symbol: String,

    /// Human readable name
    /// 이름
    #[schema(example = "Ethereum")]
    pub name: String,

    /// Display balance (decimal string)
    /// 표시용 잔고 (10진수 문자열)
    #[schema(example = "10.5")]
    pub balance: String,
}

impl Token {
    pub fn new(id: &str, symbol: &str, name: &str, balance: &str) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            balance: balance.to_string(),
        }
    }
}
