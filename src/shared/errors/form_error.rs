use thiserror::Error;
use crate::domains::swap_form::models::ValidationErrors;

/// 폼 입력 변경 에러
/// Field change errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// 제출 처리 중에는 입력 비활성화
    #[error("Form is locked while a swap is being submitted")]
    Busy,
}

/// 스왑 제출 에러
/// Swap submission errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// 검증 실패: 필드별 첫 번째 에러 메시지
    #[error("Swap form is invalid ({} field error(s))", .0.len())]
    Invalid(ValidationErrors),

    /// 이미 제출 중
    #[error("A swap is already being submitted")]
    AlreadySubmitting,

    /// 환율 조회 중에는 제출 불가
    #[error("Exchange rate is still loading")]
    RateLoading,
}
