//! 전략 전역에서 사용하는 에러 시스템
//!
//! Google OAuth 전략을 위한 통합 에러 타입입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공하며,
//! 모든 에러는 복구 없이 호출자(OAuth2 엔진)에게 그대로 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! fn require(value: &str) -> AppResult<()> {
//!     if value.is_empty() {
//!         return Err(AppError::ValidationError("client_id is required".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 전략 전역 에러 타입
///
/// 설정 검증부터 사용자 정보 조회, 검증 콜백까지
/// 인증 과정에서 발생할 수 있는 모든 에러를 포괄합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 전략 설정 검증 에러 (필수 항목 누락 등)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 환경 설정 로딩 에러
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// 외부 서비스 에러 (네트워크 실패, 비정상 응답 상태)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 응답 본문 파싱 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 인증 실패 에러 (검증 콜백 거부)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 에러
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
