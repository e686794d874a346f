use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use token_swap::routes::create_app;
use token_swap::shared::config::AppConfig;
use token_swap::shared::services::AppState;

// Import models for OpenAPI schema
use token_swap::domains::swap::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        token_swap::domains::swap::handlers::token_handler::list_tokens,
        token_swap::domains::swap::handlers::rate_handler::get_rate
    ),
    components(schemas(
        Token,
        RateRequest,
        RateResponse,
        ErrorResponse
    )),
    tags(
        (name = "Tokens", description = "Token catalog API endpoints"),
        (name = "Rates", description = "Exchange rate API endpoints")
    ),
    info(
        title = "Token Swap API",
        description = "Mock token catalog and exchange rate service for the swap form",
        version = "1.0.0"
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<()> {
    // 로그 초기화 (RUST_LOG, 기본값: info)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 설정 로드
    let config = AppConfig::from_env().context("Failed to load configuration")?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(&config);

    // CORS 설정
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS_ORIGIN: {}", config.cors_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    // Router 생성
    let app = create_app(app_state)
        .merge(
            SwaggerUi::new("/api")
                .url("/api-docs/openapi.json", ApiDoc::openapi())
        )
        .layer(cors);

    // 서버 시작
    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        %addr,
        tokens = config.market.tokens.len(),
        rates = config.market.rates.len(),
        "Server running"
    );
    tracing::info!("Swagger UI available at http://{}/api", addr);

    // 서버 실행
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
