use std::sync::Arc;
use std::time::Duration;

use crate::domains::swap::models::Token;

// 토큰 카탈로그 서비스
// 역할: NestJS의 Service 같은 것
// TokenService: serves the fixed token list
#[derive(Clone)]
pub struct TokenService {
    tokens: Arc<Vec<Token>>,
    latency: Duration,
}

impl TokenService {
    // 생성자
    pub fn new(tokens: Arc<Vec<Token>>, latency: Duration) -> Self {
        Self { tokens, latency }
    }

    // 토큰 목록 조회 (비즈니스 로직)
    // List tokens; static data so this never fails
    pub async fn list_tokens(&self) -> Vec<Token> {
        // 실제 API처럼 약간의 지연
        tokio::time::sleep(self.latency).await;

        tracing::debug!(count = self.tokens.len(), "Serving token catalog");
        self.tokens.as_ref().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::MarketConfig;

    fn service() -> TokenService {
        TokenService::new(Arc::new(MarketConfig::default().tokens), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_list_tokens_returns_catalog_in_order() {
        let tokens = service().list_tokens().await;
        let symbols: Vec<&str> = tokens.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["ETH", "USDC", "DAI"]);
        assert_eq!(tokens[0].balance, "10.5");
    }
}
