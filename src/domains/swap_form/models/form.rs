use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::swap::models::Token;

/// 폼 입력 필드
/// Swap form fields (serialized with the form's field names)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FromToken,
    ToToken,
    Amount,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FromToken => "fromToken",
            FormField::ToToken => "toToken",
            FormField::Amount => "amount",
        }
    }

    /// 토큰 쌍을 구성하는 필드인지 (변경 시 환율 재조회)
    pub fn is_pair_field(&self) -> bool {
        matches!(self, FormField::FromToken | FormField::ToToken)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 사용자 입력값
/// Raw user input, exactly as typed/selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapFormData {
    pub from_token: String,
    pub to_token: String,
    pub amount: String,
}

impl SwapFormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FromToken => self.from_token.as_str(),
            FormField::ToToken => self.to_token.as_str(),
            FormField::Amount => self.amount.as_str(),
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FromToken => self.from_token = value,
            FormField::ToToken => self.to_token = value,
            FormField::Amount => self.amount = value,
        }
    }

    /// 두 토큰이 모두 선택된 경우에만 쌍 반환
    pub fn pair(&self) -> Option<(&str, &str)> {
        if self.from_token.is_empty() || self.to_token.is_empty() {
            None
        } else {
            Some((self.from_token.as_str(), self.to_token.as_str()))
        }
    }
}

/// 필드별 검증 에러 (필드당 첫 번째 메시지만)
/// Flat field → message map, first failing rule per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FormField, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이미 에러가 있는 필드는 덮어쓰지 않음
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// 폼 컨트롤러 상태
/// Form controller state; owned by the controller only
#[derive(Debug, Clone, Default)]
pub struct SwapFormState {
    pub tokens: Vec<Token>,
    pub data: SwapFormData,
    pub errors: ValidationErrors,
    pub rate: Option<f64>,
    pub loading_tokens: bool,
    pub loading_rate: bool,
    pub submitting: bool,
    pub notifications: Vec<Notification>,
    /// 마지막으로 발행한 환율 요청 순번
    pub rate_request_seq: u64,
}

impl SwapFormState {
    pub fn find_token(&self, id: &str) -> Option<&Token> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// 심볼 조회 (없으면 빈 문자열)
    pub fn symbol_of(&self, id: &str) -> &str {
        self.find_token(id).map(|t| t.symbol.as_str()).unwrap_or("")
    }
}

/// 사용자 알림
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// 스왑 성공 결과 (실제 전송 없음)
/// Confirmation of a simulated swap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapConfirmation {
    pub id: Uuid,
    pub from_token: String,
    pub to_token: String,
    pub amount: String,
    /// 제출 시점의 예상 수령량 (환율이 없으면 None)
    pub estimated_output: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_keep_first_message_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add(FormField::Amount, "Amount is required");
        errors.add(FormField::FromToken, "From token is required");
        errors.add(FormField::Amount, "Amount must be greater than 0");

        let fields: Vec<(&str, &str)> = errors
            .iter()
            .map(|(field, message)| (field.as_str(), message))
            .collect();
        assert_eq!(
            fields,
            vec![
                ("fromToken", "From token is required"),
                ("amount", "Amount is required"),
            ]
        );
    }
}
