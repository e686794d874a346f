// =====================================================
// 통합 테스트 공통 헬퍼
// =====================================================
// 목적: 모든 통합 테스트에서 공통으로 사용하는 셋업 함수 제공
//
// 사용법:
// ```rust
// mod common;
// use common::*;
//
// #[tokio::test]
// async fn test_something() {
//     let app = test_app();
//     // 테스트 코드...
// }
// ```
// =====================================================
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;

use token_swap::domains::swap::models::Token;
use token_swap::domains::swap::services::SwapState;
use token_swap::domains::swap_form::services::{FormConfig, SwapBackend, SwapFormController};
use token_swap::routes::create_app;
use token_swap::shared::config::{AppConfig, MarketConfig};
use token_swap::shared::errors::SwapError;
use token_swap::shared::services::AppState;

/// 지연 없는 테스트용 설정
pub fn test_config() -> AppConfig {
    AppConfig {
        tokens_latency: Duration::ZERO,
        rates_latency: Duration::ZERO,
        ..AppConfig::default()
    }
}

/// 지연 없는 SwapState
pub fn test_swap_state() -> SwapState {
    let config = test_config();
    SwapState::new(config.market, config.tokens_latency, config.rates_latency)
}

/// 라우터 (oneshot 테스트용)
pub fn test_app() -> Router {
    create_app(AppState::new(&test_config()))
}

/// 실제 포트에 서버 띄우기 (127.0.0.1:0)
///
/// # Returns
/// 서버 base URL (예: "http://127.0.0.1:54321")
pub async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, test_app())
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// 제출 지연 없는 폼 설정
pub fn fast_form_config() -> FormConfig {
    FormConfig {
        submit_delay: Duration::from_millis(10),
    }
}

/// 쌍별로 응답 지연을 조절할 수 있는 테스트용 백엔드
///
/// - 토큰 목록: 기본 카탈로그 (fail_tokens = true면 실패)
/// - 환율: 기본 테이블, `delays`에 있는 쌍은 그만큼 늦게 응답
/// - 호출 횟수 기록
pub struct ScriptedBackend {
    market: MarketConfig,
    delays: HashMap<String, Duration>,
    fail_tokens: bool,
    pub token_calls: AtomicUsize,
    pub rate_calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            market: MarketConfig::default(),
            delays: HashMap::new(),
            fail_tokens: false,
            token_calls: AtomicUsize::new(0),
            rate_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, from: &str, to: &str, delay: Duration) -> Self {
        self.delays.insert(format!("{}-{}", from, to), delay);
        self
    }

    pub fn failing_tokens(mut self) -> Self {
        self.fail_tokens = true;
        self
    }

    pub fn rate_calls(&self) -> usize {
        self.rate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SwapBackend for ScriptedBackend {
    async fn fetch_tokens(&self) -> Result<Vec<Token>, SwapError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_tokens {
            return Err(SwapError::TransientFetch("Failed to fetch tokens".to_string()));
        }
        Ok(self.market.tokens.clone())
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, SwapError> {
        self.rate_calls.fetch_add(1, Ordering::SeqCst);
        let key = format!("{}-{}", from, to);
        if let Some(delay) = self.delays.get(&key) {
            tokio::time::sleep(*delay).await;
        }
        self.market
            .rates
            .get(&key)
            .copied()
            .ok_or_else(|| SwapError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

/// 마운트까지 끝난 컨트롤러
pub async fn mounted_controller(
    backend: ScriptedBackend,
) -> (SwapFormController<ScriptedBackend>, Arc<ScriptedBackend>) {
    let backend = Arc::new(backend);
    let controller = SwapFormController::new(Arc::clone(&backend), fast_form_config());
    controller.mount().await;
    (controller, backend)
}
