// =====================================================
// 스왑 폼 검증
// =====================================================
// 규칙 (필드당 첫 번째 실패 규칙의 메시지만 기록):
//   fromToken: 비어있으면 안 됨
//   toToken:   비어있으면 안 됨, fromToken과 같으면 안 됨
//   amount:    비어있으면 안 됨 -> 숫자여야 함 -> 0보다 커야 함
// =====================================================

use crate::domains::swap_form::models::{FormField, SwapFormData, ValidationErrors};

pub const FROM_TOKEN_REQUIRED: &str = "From token is required";
pub const TO_TOKEN_REQUIRED: &str = "To token is required";
pub const SAME_TOKEN: &str = "To token must differ from from token";
pub const AMOUNT_REQUIRED: &str = "Amount is required";
pub const AMOUNT_NOT_A_NUMBER: &str = "Amount must be a number";
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than 0";

/// 금액 문자열 파싱
///
/// 앞뒤 공백은 무시하고, 공백만 있는 입력은 0으로 취급합니다.
/// NaN/무한대는 숫자로 인정하지 않습니다.
///
/// 브라우저의 `Number()`와 다른 점: `"Infinity"`나 범위를 넘는 `"1e400"`,
/// `"0x10"` 같은 16진수 표기는 모두 숫자가 아님(None)으로 처리됩니다.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 폼 전체 검증
/// Validate the whole form; an empty map means the form is submittable
pub fn validate(data: &SwapFormData) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if data.from_token.is_empty() {
        errors.add(FormField::FromToken, FROM_TOKEN_REQUIRED);
    }

    if data.to_token.is_empty() {
        errors.add(FormField::ToToken, TO_TOKEN_REQUIRED);
    } else if data.to_token == data.from_token {
        errors.add(FormField::ToToken, SAME_TOKEN);
    }

    if data.amount.is_empty() {
        errors.add(FormField::Amount, AMOUNT_REQUIRED);
    } else {
        match parse_amount(&data.amount) {
            None => errors.add(FormField::Amount, AMOUNT_NOT_A_NUMBER),
            Some(amount) if amount <= 0.0 => errors.add(FormField::Amount, AMOUNT_NOT_POSITIVE),
            Some(_) => {}
        }
    }

    errors
}
