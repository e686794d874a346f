// Swap domain state
// 스왑 도메인 상태
use std::sync::Arc;
use std::time::Duration;

use crate::domains::swap::services::{RateService, TokenService};
use crate::shared::config::MarketConfig;

/// Swap domain state
/// 스왑 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct SwapState {
    pub token_service: TokenService,
    pub rate_service: RateService,
}

impl SwapState {
    /// Create SwapState from market tables
    /// 테이블은 Arc로 공유 (읽기 전용이라 락 불필요)
    pub fn new(market: MarketConfig, tokens_latency: Duration, rates_latency: Duration) -> Self {
        let MarketConfig { tokens, rates } = market;
        Self {
            token_service: TokenService::new(Arc::new(tokens), tokens_latency),
            rate_service: RateService::new(Arc::new(rates), rates_latency),
        }
    }
}
