use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::shared::config::pair_key;
use crate::shared::errors::SwapError;

// 환율 조회 서비스
// RateService: directional lookup over the static rate table
//
// Note: 테이블은 대칭이 아님. rate(A,B)가 있어도 rate(B,A)를 역수로 계산하지 않음
#[derive(Clone)]
pub struct RateService {
    rates: Arc<HashMap<String, f64>>,
    latency: Duration,
}

impl RateService {
    // 생성자
    pub fn new(rates: Arc<HashMap<String, f64>>, latency: Duration) -> Self {
        Self { rates, latency }
    }

    /// 환율 조회 (비즈니스 로직)
    /// Get the rate for an ordered pair
    ///
    /// # Errors
    /// * `SwapError::MissingParameter` - from/to 누락 또는 빈 문자열 (조회 시도 안 함)
    /// * `SwapError::RateNotFound` - 테이블에 없는 쌍
    pub async fn get_rate(&self, from: Option<&str>, to: Option<&str>) -> Result<f64, SwapError> {
        let (from, to) = match (from, to) {
            (Some(from), Some(to)) if !from.is_empty() && !to.is_empty() => (from, to),
            _ => return Err(SwapError::MissingParameter),
        };

        let rate = self.lookup(from, to)?;

        // 성공한 경우에만 지연 (에러는 즉시 응답)
        tokio::time::sleep(self.latency).await;

        Ok(rate)
    }

    // 지연 없이 테이블만 조회
    pub fn lookup(&self, from: &str, to: &str) -> Result<f64, SwapError> {
        self.rates
            .get(&pair_key(from, to))
            .copied()
            .ok_or_else(|| SwapError::RateNotFound {
                from: from.to_string(),
                to: to.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::MarketConfig;

    fn service() -> RateService {
        RateService::new(Arc::new(MarketConfig::default().rates), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_every_configured_pair_returns_its_value() {
        let service = service();
        for (key, expected) in MarketConfig::default().rates {
            let (from, to) = key.split_once('-').unwrap();
            let rate = service.get_rate(Some(from), Some(to)).await.unwrap();
            assert_eq!(rate, expected, "pair {}", key);
        }
    }

    /// 테스트: 역방향은 역수가 아님
    #[tokio::test]
    async fn test_no_implicit_inversion() {
        let service = service();
        assert_eq!(service.get_rate(Some("1"), Some("2")).await.unwrap(), 1800.0);
        let reverse = service.get_rate(Some("2"), Some("1")).await.unwrap();
        assert_eq!(reverse, 0.00055);
        assert_ne!(reverse, 1.0 / 1800.0);
    }

    #[tokio::test]
    async fn test_missing_parameters() {
        let service = service();
        for (from, to) in [(None, Some("2")), (Some("1"), None), (None, None), (Some(""), Some("2"))] {
            assert_eq!(service.get_rate(from, to).await, Err(SwapError::MissingParameter));
        }
    }

    #[tokio::test]
    async fn test_unknown_pair() {
        let service = service();
        assert_eq!(
            service.get_rate(Some("1"), Some("1")).await,
            Err(SwapError::RateNotFound { from: "1".to_string(), to: "1".to_string() })
        );
        assert!(service.get_rate(Some("1"), Some("42")).await.is_err());
    }

    /// 테스트: 에러 경로는 지연 없이 바로 반환
    #[tokio::test]
    async fn test_errors_skip_latency() {
        let service = RateService::new(
            Arc::new(MarketConfig::default().rates),
            Duration::from_secs(30),
        );
        let started = std::time::Instant::now();
        assert!(service.get_rate(Some("1"), Some("9")).await.is_err());
        assert!(service.get_rate(None, Some("9")).await.is_err());
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
