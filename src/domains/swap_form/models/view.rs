use serde::Serialize;

use crate::domains::swap_form::models::{FormField, SwapFormData, ValidationErrors};

pub const PLACEHOLDER_OPTION: &str = "Select token";
pub const SUBMIT_LABEL: &str = "Swap Tokens";
pub const SUBMIT_LABEL_BUSY: &str = "Processing...";
pub const LOADING_TOKENS_TEXT: &str = "Loading tokens...";
pub const LOADING_RATE_TEXT: &str = "Loading exchange rate...";

/// 렌더링용 폼 모델 (상태에서 매번 새로 계산)
/// Render model, derived from state on every call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum SwapFormView {
    LoadingTokens { message: &'static str },
    Form(FormView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub data: SwapFormData,
    pub from_options: Vec<TokenOption>,
    pub to_options: Vec<TokenOption>,
    pub errors: ValidationErrors,
    pub rate_panel: RatePanel,
    /// 제출 중에는 입력 비활성화
    pub inputs_disabled: bool,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
}

impl FormView {
    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(field)
    }
}

/// select 옵션 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenOption {
    /// 빈 문자열 = placeholder
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl TokenOption {
    pub fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: PLACEHOLDER_OPTION.to_string(),
            disabled: false,
        }
    }
}

/// 환율/예상 수령량 영역
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RatePanel {
    Hidden,
    Loading { message: &'static str },
    Quote(SwapEstimate),
}

/// 예상 수령량
/// e.g. "You will receive approximately 3600.000000 USDC" / "Rate: 1 ETH = 1800 USDC"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapEstimate {
    /// amount × rate, 소수점 6자리
    pub output: String,
    pub to_symbol: String,
    pub from_symbol: String,
    pub rate: f64,
}

impl SwapEstimate {
    pub fn receive_line(&self) -> String {
        format!(
            "You will receive approximately {} {}",
            self.output, self.to_symbol
        )
    }

    pub fn rate_line(&self) -> String {
        format!("Rate: 1 {} = {} {}", self.from_symbol, self.rate, self.to_symbol)
    }
}
