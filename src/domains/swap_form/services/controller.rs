// =====================================================
// SwapFormController - 스왑 폼 상태 머신
// =====================================================
// 상태 전이:
//   mount       : loading_tokens -> 토큰 목록 조회 -> loading_tokens 해제
//   set_field   : 입력값 즉시 반영, 토큰 쌍이 바뀌면 환율 재조회
//   refresh     : 쌍이 완성되면 loading_rate -> 환율 조회 (spawn)
//                 쌍이 불완전하면 rate = None (네트워크 호출 없음)
//   submit      : 검증 -> submitting -> 지연 -> 성공 알림
//
// 환율 요청 순서 보장:
//   요청마다 순번(rate_request_seq)을 붙이고, 응답 도착 시
//   최신 순번이 아니면 버림 (늦게 도착한 이전 응답이 덮어쓰지 않도록)
// =====================================================

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::future::join_all;
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::domains::swap_form::models::{
    FormField, Notification, SwapConfirmation, SwapFormState, SwapFormView,
};
use crate::domains::swap_form::services::backend::SwapBackend;
use crate::domains::swap_form::services::render::{estimate, render};
use crate::domains::swap_form::services::validation::validate;
use crate::shared::errors::{FormError, SubmitError};

pub const SWAP_SUCCESS_MESSAGE: &str = "Swap successful!";

/// 폼 설정
#[derive(Debug, Clone)]
pub struct FormConfig {
    /// 제출 처리 시뮬레이션 지연 (기본값: 1초)
    pub submit_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay: Duration::from_secs(1),
        }
    }
}

/// 스왑 폼 컨트롤러
///
/// 상태는 `Mutex` 안에 있고, 락은 `.await` 사이에 절대 잡고 있지 않습니다.
/// `set_field`는 환율 조회를 spawn 하므로 tokio 런타임 안에서 호출해야 합니다.
pub struct SwapFormController<B: SwapBackend> {
    backend: Arc<B>,
    config: FormConfig,
    state: Arc<Mutex<SwapFormState>>,
    rate_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl<B: SwapBackend> SwapFormController<B> {
    pub fn new(backend: Arc<B>, config: FormConfig) -> Self {
        // 마운트 전에는 "Loading tokens..." 화면
        let state = SwapFormState {
            loading_tokens: true,
            ..SwapFormState::default()
        };

        Self {
            backend,
            config,
            state: Arc::new(Mutex::new(state)),
            rate_tasks: Mutex::new(Vec::new()),
        }
    }

    /// 마운트: 토큰 목록 로드
    ///
    /// 실패해도 에러를 올리지 않고 로그만 남김 (빈 목록으로 계속 진행)
    pub async fn mount(&self) {
        self.state.lock().loading_tokens = true;

        match self.backend.fetch_tokens().await {
            Ok(tokens) => {
                tracing::info!(count = tokens.len(), "Loaded tokens");
                self.state.lock().tokens = tokens;
            }
            Err(e) => {
                tracing::error!("Error fetching tokens: {}", e);
            }
        }

        self.state.lock().loading_tokens = false;
    }

    /// 입력값 변경
    ///
    /// fromToken/toToken 값이 실제로 바뀐 경우에만 환율을 다시 조회합니다.
    pub fn set_field(&self, field: FormField, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();

        let mut state = self.state.lock();
        if state.submitting {
            return Err(FormError::Busy);
        }

        let changed = state.data.get(field) != value;
        state.data.set(field, value);

        if field.is_pair_field() && changed {
            self.refresh_rate(&mut state);
        }

        Ok(())
    }

    // 환율 재조회 (state 락을 잡은 상태에서 호출)
    fn refresh_rate(&self, state: &mut SwapFormState) {
        state.rate_request_seq += 1;
        let seq = state.rate_request_seq;

        let Some((from, to)) = state
            .data
            .pair()
            .map(|(from, to)| (from.to_string(), to.to_string()))
        else {
            // 쌍이 불완전: 네트워크 호출 없이 초기화
            state.rate = None;
            state.loading_rate = false;
            return;
        };

        // 이전 쌍의 환율이 새 쌍에 쓰이지 않도록 응답 전까지 비움
        state.rate = None;
        state.loading_rate = true;

        let backend = Arc::clone(&self.backend);
        let shared = Arc::clone(&self.state);

        let handle = tokio::spawn(async move {
            let result = backend.fetch_rate(&from, &to).await;

            let mut state = shared.lock();
            if state.rate_request_seq != seq {
                tracing::debug!(seq, latest = state.rate_request_seq, %from, %to, "Discarding stale rate response");
                return;
            }

            match result {
                Ok(rate) => {
                    tracing::debug!(%from, %to, rate, "Rate updated");
                    state.rate = Some(rate);
                }
                Err(e) => {
                    tracing::error!(%from, %to, "Error fetching rate: {}", e);
                    state.rate = None;
                }
            }
            state.loading_rate = false;
        });

        let mut tasks = self.rate_tasks.lock();
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// 진행 중인 환율 조회가 모두 끝날 때까지 대기
    /// Wait for every in-flight rate fetch to resolve
    pub async fn settle(&self) {
        loop {
            let tasks: Vec<JoinHandle<()>> = std::mem::take(&mut *self.rate_tasks.lock());
            if tasks.is_empty() {
                return;
            }
            for result in join_all(tasks).await {
                if let Err(e) = result {
                    tracing::error!("Rate fetch task failed: {}", e);
                }
            }
        }
    }

    /// 스왑 제출
    ///
    /// # Errors
    /// * `SubmitError::Invalid` - 검증 실패 (필드별 에러는 상태에도 기록, 네트워크 호출 없음)
    /// * `SubmitError::AlreadySubmitting` - 이미 제출 처리 중
    /// * `SubmitError::RateLoading` - 입력은 유효하지만 환율 조회 중 (버튼 비활성화와 동일한 조건)
    pub async fn submit(&self) -> Result<SwapConfirmation, SubmitError> {
        let (data, estimated_output) = {
            let mut state = self.state.lock();
            if state.submitting {
                return Err(SubmitError::AlreadySubmitting);
            }

            let errors = validate(&state.data);
            if !errors.is_empty() {
                let fields: Vec<&str> = errors.iter().map(|(field, _)| field.as_str()).collect();
                tracing::debug!(?fields, "Swap form validation failed");
                state.errors = errors.clone();
                return Err(SubmitError::Invalid(errors));
            }
            state.errors.clear();

            // 환율이 확정되기 전의 예상 수령량으로 제출하지 않음
            if state.loading_rate {
                return Err(SubmitError::RateLoading);
            }

            state.submitting = true;
            (state.data.clone(), estimate(&state).map(|e| e.output))
        };

        // future가 중간에 drop 되어도 submitting 플래그는 해제
        let _guard = SubmittingGuard {
            state: Arc::clone(&self.state),
        };

        tracing::info!(
            from = %data.from_token,
            to = %data.to_token,
            amount = %data.amount,
            "Performing swap"
        );

        // 실제 스왑 API 대신 지연만 시뮬레이션
        tokio::time::sleep(self.config.submit_delay).await;

        let confirmation = SwapConfirmation {
            id: Uuid::new_v4(),
            from_token: data.from_token,
            to_token: data.to_token,
            amount: data.amount,
            estimated_output,
            submitted_at: Utc::now(),
        };

        self.state
            .lock()
            .notifications
            .push(Notification::new(SWAP_SUCCESS_MESSAGE));

        Ok(confirmation)
    }

    /// 현재 화면 모델
    pub fn view(&self) -> SwapFormView {
        render(&self.state.lock())
    }

    /// 상태 스냅샷
    pub fn snapshot(&self) -> SwapFormState {
        self.state.lock().clone()
    }

    pub fn rate(&self) -> Option<f64> {
        self.state.lock().rate
    }
}

struct SubmittingGuard {
    state: Arc<Mutex<SwapFormState>>,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.state.lock().submitting = false;
    }
}
