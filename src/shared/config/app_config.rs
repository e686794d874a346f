use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::shared::config::MarketConfig;

/// 서버 설정
/// Server configuration
///
/// 환경변수가 없으면 기본값 사용
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 바인드 호스트 (기본값: 0.0.0.0)
    pub host: String,

    /// 바인드 포트 (기본값: 3002)
    pub port: u16,

    /// 허용할 프론트엔드 Origin
    /// Allowed CORS origin
    pub cors_origin: String,

    /// 토큰 목록 응답 지연 (네트워크 흉내)
    /// Artificial latency for `GET /api/tokens`
    pub tokens_latency: Duration,

    /// 환율 응답 지연 (성공 시에만 적용)
    /// Artificial latency for successful `GET /api/rates`
    pub rates_latency: Duration,

    /// 토큰/환율 테이블
    pub market: MarketConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3002,
            cors_origin: "http://localhost:3003".to_string(),
            tokens_latency: Duration::from_millis(500),
            rates_latency: Duration::from_millis(300),
            market: MarketConfig::default(),
        }
    }
}

impl AppConfig {
    /// 환경변수에서 설정 로드
    /// Load configuration from environment variables
    ///
    /// # 환경 변수
    /// * `SERVER_HOST`, `SERVER_PORT`
    /// * `CORS_ORIGIN`
    /// * `TOKENS_LATENCY_MS`, `RATES_LATENCY_MS`
    /// * `MARKET_CONFIG` - 토큰/환율 JSON 파일 경로 (없으면 내장 테이블)
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid SERVER_PORT: {}", raw))?,
            Err(_) => defaults.port,
        };

        let market = match std::env::var("MARKET_CONFIG") {
            Ok(path) => MarketConfig::from_file(&path)?,
            Err(_) => defaults.market,
        };

        Ok(Self {
            host: std::env::var("SERVER_HOST").unwrap_or(defaults.host),
            port,
            cors_origin: std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin),
            tokens_latency: millis_from_env("TOKENS_LATENCY_MS").unwrap_or(defaults.tokens_latency),
            rates_latency: millis_from_env("RATES_LATENCY_MS").unwrap_or(defaults.rates_latency),
            market,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.host, self.port))
    }
}

fn millis_from_env(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
}
