// 상태 -> 화면 모델 변환
// 저장하지 않고 렌더링할 때마다 다시 계산 (amount/rate/토큰 선택 변경 즉시 반영)

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal::prelude::FromPrimitive;

use crate::domains::swap_form::models::{
    FormView, RatePanel, SwapEstimate, SwapFormState, SwapFormView, TokenOption,
    LOADING_RATE_TEXT, LOADING_TOKENS_TEXT, SUBMIT_LABEL, SUBMIT_LABEL_BUSY,
};
use crate::domains::swap_form::services::validation::parse_amount;

/// 예상 수령량 계산
///
/// 환율이 없거나, 금액이 비어있거나, 숫자가 아니면 None
///
/// 보통은 `Decimal`로 계산하고, `Decimal` 범위(약 7.9e28)를 넘는 값은 f64로 계산합니다.
pub fn estimate(state: &SwapFormState) -> Option<SwapEstimate> {
    let rate = state.rate?;
    if state.data.amount.is_empty() {
        return None;
    }
    let amount = parse_amount(&state.data.amount)?;

    Some(SwapEstimate {
        output: format_output(amount, rate)?,
        to_symbol: state.symbol_of(&state.data.to_token).to_string(),
        from_symbol: state.symbol_of(&state.data.from_token).to_string(),
        rate,
    })
}

// 소수점 6자리 문자열 (반올림: 0.5는 0에서 먼 쪽으로)
fn format_output(amount: f64, rate: f64) -> Option<String> {
    let exact = Decimal::from_f64(amount)
        .zip(Decimal::from_f64(rate))
        .and_then(|(amount, rate)| amount.checked_mul(rate));

    match exact {
        Some(output) => Some(format!(
            "{:.6}",
            output.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero)
        )),
        None => {
            let output = amount * rate;
            output.is_finite().then(|| format!("{:.6}", output))
        }
    }
}

/// 화면 모델 생성
pub fn render(state: &SwapFormState) -> SwapFormView {
    if state.loading_tokens {
        return SwapFormView::LoadingTokens {
            message: LOADING_TOKENS_TEXT,
        };
    }

    let from_options = std::iter::once(TokenOption::placeholder())
        .chain(state.tokens.iter().map(|token| TokenOption {
            value: token.id.clone(),
            label: format!("{} - {} (Balance: {})", token.symbol, token.name, token.balance),
            disabled: false,
        }))
        .collect();

    // 같은 토큰끼리는 스왑 불가: from에서 고른 토큰은 to 목록에서 비활성화
    let to_options = std::iter::once(TokenOption::placeholder())
        .chain(state.tokens.iter().map(|token| TokenOption {
            value: token.id.clone(),
            label: format!("{} - {}", token.symbol, token.name),
            disabled: token.id == state.data.from_token,
        }))
        .collect();

    let rate_panel = if state.loading_rate {
        RatePanel::Loading {
            message: LOADING_RATE_TEXT,
        }
    } else {
        estimate(state).map(RatePanel::Quote).unwrap_or(RatePanel::Hidden)
    };

    SwapFormView::Form(FormView {
        data: state.data.clone(),
        from_options,
        to_options,
        errors: state.errors.clone(),
        rate_panel,
        inputs_disabled: state.submitting,
        submit_label: if state.submitting { SUBMIT_LABEL_BUSY } else { SUBMIT_LABEL },
        submit_enabled: !state.submitting && !state.loading_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::swap_form::models::SwapFormData;
    use crate::shared::config::MarketConfig;

    fn ready_state(from: &str, to: &str, amount: &str, rate: Option<f64>) -> SwapFormState {
        SwapFormState {
            tokens: MarketConfig::default().tokens,
            data: SwapFormData {
                from_token: from.to_string(),
                to_token: to.to_string(),
                amount: amount.to_string(),
            },
            rate,
            ..SwapFormState::default()
        }
    }

    #[test]
    fn test_estimate_eth_to_usdc() {
        let estimate = estimate(&ready_state("1", "2", "2", Some(1800.0))).unwrap();
        assert_eq!(estimate.output, "3600.000000");
        assert_eq!(estimate.receive_line(), "You will receive approximately 3600.000000 USDC");
        assert_eq!(estimate.rate_line(), "Rate: 1 ETH = 1800 USDC");
    }

    #[test]
    fn test_estimate_small_rate() {
        let estimate = estimate(&ready_state("2", "1", "2.5", Some(0.00055))).unwrap();
        assert_eq!(estimate.output, "0.001375");
        assert_eq!(estimate.rate_line(), "Rate: 1 USDC = 0.00055 ETH");
    }

    #[test]
    fn test_estimate_suppressed() {
        assert!(estimate(&ready_state("1", "2", "2", None)).is_none());
        assert!(estimate(&ready_state("1", "2", "", Some(1800.0))).is_none());
        assert!(estimate(&ready_state("1", "2", "abc", Some(1800.0))).is_none());
    }

    #[test]
    fn test_estimate_beyond_decimal_range() {
        let estimate = estimate(&ready_state("1", "2", "1e26", Some(1800.0))).unwrap();
        assert!(estimate.output.ends_with(".000000"), "{}", estimate.output);
        let output: f64 = estimate.output.parse().unwrap();
        assert!((output / 1.8e29 - 1.0).abs() < 1e-12, "{}", estimate.output);

        // f64로도 표현 불가하면 숨김
        assert!(super::estimate(&ready_state("1", "2", "1e308", Some(1800.0))).is_none());
    }

    #[test]
    fn test_loading_tokens_screen() {
        let state = SwapFormState {
            loading_tokens: true,
            ..SwapFormState::default()
        };
        assert_eq!(
            render(&state),
            SwapFormView::LoadingTokens { message: LOADING_TOKENS_TEXT }
        );
    }

    #[test]
    fn test_options_disable_selected_from_token() {
        let SwapFormView::Form(view) = render(&ready_state("1", "", "", None)) else {
            panic!("expected form view");
        };

        assert_eq!(view.from_options.len(), 4);
        assert_eq!(view.from_options[0].label, "Select token");
        assert_eq!(view.from_options[1].label, "ETH - Ethereum (Balance: 10.5)");
        assert!(view.from_options.iter().all(|o| !o.disabled));

        assert_eq!(view.to_options[2].label, "USDC - USD Coin");
        let disabled: Vec<&str> = view
            .to_options
            .iter()
            .filter(|o| o.disabled)
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(disabled, vec!["1"]);
        assert_eq!(view.rate_panel, RatePanel::Hidden);
    }

    #[test]
    fn test_rate_panel_and_submit_button() {
        let mut state = ready_state("1", "2", "2", Some(1800.0));
        state.loading_rate = true;
        let SwapFormView::Form(view) = render(&state) else {
            panic!("expected form view");
        };
        assert_eq!(view.rate_panel, RatePanel::Loading { message: LOADING_RATE_TEXT });
        assert!(!view.submit_enabled);

        state.loading_rate = false;
        state.submitting = true;
        let SwapFormView::Form(view) = render(&state) else {
            panic!("expected form view");
        };
        assert!(matches!(view.rate_panel, RatePanel::Quote(_)));
        assert_eq!(view.submit_label, "Processing...");
        assert!(view.inputs_disabled);
        assert!(!view.submit_enabled);
    }
}
