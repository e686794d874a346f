use crate::domains::swap::services::state::SwapState;
use crate::shared::config::AppConfig;

/// Application state (combines all domain states)
/// 애플리케이션 상태 (모든 도메인 상태를 조합)
///
/// 역할: NestJS의 Module에서 모든 Service를 주입하는 것과 유사
#[derive(Clone)]
pub struct AppState {
    pub swap_state: SwapState,
}

impl AppState {
    /// Create AppState from configuration
    /// 설정으로부터 도메인 State를 초기화하고 조합
    pub fn new(config: &AppConfig) -> Self {
        let swap_state = SwapState::new(
            config.market.clone(),
            config.tokens_latency,
            config.rates_latency,
        );

        Self { swap_state }
    }
}
