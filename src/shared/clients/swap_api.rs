use crate::domains::swap::models::{ErrorResponse, RateResponse, Token};
use crate::shared::errors::SwapError;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use url::Url;

// 스왑 API 클라이언트
// 역할: NestJS의 HttpClient나 axios 같은 것
// HTTP client for the token/rate endpoints (used by the swap form)
//
// 에러 매핑:
//   400 -> SwapError::MissingParameter
//   404 -> SwapError::RateNotFound
//   그 외 (연결 실패, 5xx, 파싱 실패) -> SwapError::TransientFetch
#[derive(Clone)]
pub struct SwapApiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl SwapApiClient {
    // 클라이언트 생성
    // Create new client; `base_url` is the server root, e.g. http://localhost:3002
    pub fn new(base_url: &str) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = Url::parse(base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    // 토큰 목록 조회: GET /api/tokens
    // Fetch token catalog
    pub async fn fetch_tokens(&self) -> Result<Vec<Token>, SwapError> {
        let url = self.endpoint("/api/tokens")?;

        tracing::debug!(%url, "Requesting token list");

        // HTTP GET 요청
        let response = self
            .http_client
            .get(url)
            .header("User-Agent", "token-swap/1.0")
            .send()
            .await
            .map_err(|e| transient("Failed to send request to tokens API", e))?;

        // HTTP 상태 코드 확인
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SwapError::TransientFetch(format!(
                "Tokens API returned error: {} - {}",
                status, body
            )));
        }

        // JSON 파싱
        response
            .json::<Vec<Token>>()
            .await
            .map_err(|e| transient("Failed to parse tokens API response", e))
    }

    // 환율 조회: GET /api/rates?from=..&to=..
    // Fetch the rate for an ordered pair
    pub async fn fetch_rate(&self, from: &str, to: &str) -> Result<f64, SwapError> {
        let mut url = self.endpoint("/api/rates")?;
        url.query_pairs_mut()
            .append_pair("from", from)
            .append_pair("to", to);

        tracing::debug!(%url, "Requesting rate");

        // HTTP GET 요청
        let response = self
            .http_client
            .get(url)
            .header("User-Agent", "token-swap/1.0")
            .send()
            .await
            .map_err(|e| transient("Failed to send request to rates API", e))?;

        // HTTP 상태 코드 확인
        // 400/404는 서버와 같은 에러로 되돌림, 나머지는 일시적 실패
        match response.status() {
            status if status.is_success() => {}
            StatusCode::BAD_REQUEST => return Err(SwapError::MissingParameter),
            StatusCode::NOT_FOUND => {
                return Err(SwapError::RateNotFound {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
            status => {
                let message = match response.json::<ErrorResponse>().await {
                    Ok(body) => body.error,
                    Err(_) => String::from("<unreadable body>"),
                };
                return Err(SwapError::TransientFetch(format!(
                    "Rates API returned error: {} - {}",
                    status, message
                )));
            }
        }

        // JSON 파싱
        let body: RateResponse = response
            .json()
            .await
            .map_err(|e| transient("Failed to parse rates API response", e))?;

        Ok(body.rate)
    }

    fn endpoint(&self, path: &str) -> Result<Url, SwapError> {
        self.base_url
            .join(path)
            .map_err(|e| transient("Failed to build API URL", e))
    }
}

fn transient(context: &str, err: impl std::fmt::Display) -> SwapError {
    SwapError::TransientFetch(format!("{}: {}", context, err))
}
