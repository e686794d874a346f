// =====================================================
// MarketConfig - 토큰 카탈로그 + 환율 테이블
// =====================================================
// 역할: 서비스에 주입되는 불변 설정 (런타임 중 변경 없음)
//
// 환율 키 형식: "{from}-{to}" (방향성 있음)
//   - "1-2" = ETH -> USDC
//   - "2-1" = USDC -> ETH (역수 아님, 독립적으로 정의)
// =====================================================

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domains::swap::models::Token;
use crate::shared::errors::MarketConfigError;

/// 환율 테이블 키 생성
/// Builds the literal `"{from}-{to}"` pair key
pub fn pair_key(from: &str, to: &str) -> String {
    format!("{}-{}", from, to)
}

/// 토큰 카탈로그와 환율 테이블
/// Token catalog and directional rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub tokens: Vec<Token>,
    pub rates: HashMap<String, f64>,
}

impl Default for MarketConfig {
    fn default() -> Self {
        let tokens = vec![
            Token::new("1", "ETH", "Ethereum", "10.5"),
            Token::new("2", "USDC", "USD Coin", "1000"),
            Token::new("3", "DAI", "Dai Stablecoin", "500"),
        ];

        let rates = [
            ("1-2", 1800.0),  // ETH -> USDC
            ("1-3", 1805.0),  // ETH -> DAI
            ("2-1", 0.00055), // USDC -> ETH
            ("2-3", 1.01),    // USDC -> DAI
            ("3-1", 0.00053), // DAI -> ETH
            ("3-2", 0.99),    // DAI -> USDC
        ]
        .into_iter()
        .map(|(key, rate)| (key.to_string(), rate))
        .collect();

        Self { tokens, rates }
    }
}

impl MarketConfig {
    /// JSON 파일에서 설정 로드 + 검증
    /// Load and validate a market configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read market config {}", path.display()))?;

        let config: MarketConfig = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse market config {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid market config {}", path.display()))?;

        Ok(config)
    }

    /// 설정 검증
    ///
    /// - 토큰 ID 중복 불가, 빈 값/'-' 포함 불가
    /// - 환율 키는 "{from}-{to}" 형식
    /// - 환율은 양의 유한수
    pub fn validate(&self) -> Result<(), MarketConfigError> {
        let mut seen = HashSet::new();
        for token in &self.tokens {
            if token.id.is_empty() || token.id.contains('-') {
                return Err(MarketConfigError::InvalidTokenId { id: token.id.clone() });
            }
            if !seen.insert(token.id.as_str()) {
                return Err(MarketConfigError::DuplicateTokenId { id: token.id.clone() });
            }
        }

        for (key, rate) in &self.rates {
            let well_formed = key
                .split_once('-')
                .map(|(from, to)| !from.is_empty() && !to.is_empty() && !to.contains('-'))
                .unwrap_or(false);
            if !well_formed {
                return Err(MarketConfigError::InvalidRateKey { key: key.clone() });
            }
            if !rate.is_finite() || *rate <= 0.0 {
                return Err(MarketConfigError::InvalidRate {
                    key: key.clone(),
                    rate: *rate,
                });
            }
        }

        Ok(())
    }
}
