use async_trait::async_trait;

use crate::domains::swap::models::Token;
use crate::domains::swap::services::SwapState;
use crate::shared::clients::SwapApiClient;
use crate::shared::errors::SwapError;

/// 스왑 폼이 사용하는 데이터 소스
/// Data source behind the swap form
///
/// 실패는 서버와 같은 `SwapError`로 돌려줌 (전송 실패는 `TransientFetch`)
///
/// 구현체:
/// - `SwapApiClient`: HTTP로 서버 호출
/// - `LocalSwapBackend`: 같은 프로세스의 서비스 직접 호출
#[async_trait]
pub trait SwapBackend: Send + Sync + 'static {
    /// 토큰 목록 조회
    async fn fetch_tokens(&self) -> Result<Vec<Token>, SwapError>;

    /// 환율 조회 (from 1단위당 to 수량)
    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, SwapError>;
}

#[async_trait]
impl SwapBackend for SwapApiClient {
    async fn fetch_tokens(&self) -> Result<Vec<Token>, SwapError> {
        SwapApiClient::fetch_tokens(self).await
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, SwapError> {
        SwapApiClient::fetch_rate(self, from, to).await
    }
}

/// In-process backend (HTTP 없이 서비스 직접 호출)
#[derive(Clone)]
pub struct LocalSwapBackend {
    swap_state: SwapState,
}

impl LocalSwapBackend {
    pub fn new(swap_state: SwapState) -> Self {
        Self { swap_state }
    }
}

#[async_trait]
impl SwapBackend for LocalSwapBackend {
    async fn fetch_tokens(&self) -> Result<Vec<Token>, SwapError> {
        Ok(self.swap_state.token_service.list_tokens().await)
    }

    async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, SwapError> {
        self.swap_state
            .rate_service
            .get_rate(Some(from), Some(to))
            .await
    }
}
