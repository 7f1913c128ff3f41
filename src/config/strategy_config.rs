//! # Google 전략 설정
//!
//! Google OAuth 전략을 구성하는 옵션 타입과 환경변수 로더를 제공합니다.
//!
//! ## 환경변수
//!
//! | 변수 | 필수 | 기본값 |
//! |------|------|--------|
//! | `GOOGLE_CLIENT_ID` | ✅ | - |
//! | `GOOGLE_CLIENT_SECRET` | ✅ | - |
//! | `GOOGLE_REDIRECT_URI` | ✅ | - |
//! | `GOOGLE_SCOPE` | | `openid profile email` |
//! | `GOOGLE_ACCESS_TYPE` | | `online` |
//! | `GOOGLE_INCLUDE_GRANTED_SCOPES` | | `false` |
//! | `GOOGLE_PROMPT` | | 없음 |
//! | `GOOGLE_HD` | | 없음 |
//! | `GOOGLE_LOGIN_HINT` | | 없음 |
//!
//! 전략 자체는 환경변수를 읽지 않습니다. 애플리케이션이 원하면
//! [`GoogleOAuthConfig::options_from_env`]로 옵션을 만들어 전략에 넘깁니다.
//!
//! ```rust,ignore
//! use google_oauth_strategy::config::GoogleOAuthConfig;
//!
//! let options = GoogleOAuthConfig::options_from_env()?;
//! let strategy = GoogleStrategy::new(options, verify)?;
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::models::oauth::google_oauth_model::ScopeInput;
use crate::errors::errors::{AppError, AppResult};

/// 리프레시 토큰 발급 여부를 결정하는 액세스 타입
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    #[default]
    Online,
    Offline,
}

impl AccessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessType::Online => "online",
            AccessType::Offline => "offline",
        }
    }
}

impl FromStr for AccessType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(AccessType::Online),
            "offline" => Ok(AccessType::Offline),
            _ => Err(AppError::ConfigError(format!("Unsupported access type: {}", s))),
        }
    }
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 동의 화면 표시 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Prompt {
    None,
    Consent,
    SelectAccount,
}

impl Prompt {
    pub fn as_str(&self) -> &'static str {
        match self {
            Prompt::None => "none",
            Prompt::Consent => "consent",
            Prompt::SelectAccount => "select_account",
        }
    }
}

impl FromStr for Prompt {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Prompt::None),
            "consent" => Ok(Prompt::Consent),
            "select_account" => Ok(Prompt::SelectAccount),
            _ => Err(AppError::ConfigError(format!("Unsupported prompt: {}", s))),
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Google 전략 생성 옵션
///
/// 필수 항목(`client_id`, `client_secret`, `callback_url`)의 검증은
/// 엔진 기본 설정
/// ([`OAuth2StrategyConfig`](crate::services::auth::OAuth2StrategyConfig))이 담당합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleStrategyOptions {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,

    /// 공백 구분 문자열 또는 스코프 리스트. 없으면 `openid profile email`
    #[serde(default)]
    pub scope: Option<ScopeInput>,

    #[serde(default)]
    pub access_type: Option<AccessType>,

    #[serde(default)]
    pub include_granted_scopes: Option<bool>,

    #[serde(default)]
    pub prompt: Option<Prompt>,

    /// Google Workspace 도메인 제한
    #[serde(default)]
    pub hd: Option<String>,

    #[serde(default)]
    pub login_hint: Option<String>,
}

/// 환경변수 기반 Google OAuth 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    /// 프로세스 환경변수로부터 전략 옵션을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigError` - 필수 변수가 없거나 값을 해석할 수 없는 경우
    pub fn options_from_env() -> AppResult<GoogleStrategyOptions> {
        Self::options_from_lookup(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수로부터 전략 옵션을 만듭니다.
    pub fn options_from_lookup<F>(lookup: F) -> AppResult<GoogleStrategyOptions>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| AppError::ConfigError(format!("{} must be set", key)))
        };

        let access_type = lookup("GOOGLE_ACCESS_TYPE")
            .map(|value| value.parse::<AccessType>())
            .transpose()?;

        let include_granted_scopes = lookup("GOOGLE_INCLUDE_GRANTED_SCOPES")
            .map(|value| {
                value.parse::<bool>().map_err(|e| {
                    AppError::ConfigError(format!("GOOGLE_INCLUDE_GRANTED_SCOPES 파싱 실패: {}", e))
                })
            })
            .transpose()?;

        let prompt = lookup("GOOGLE_PROMPT")
            .map(|value| value.parse::<Prompt>())
            .transpose()?;

        let options = GoogleStrategyOptions {
            client_id: required("GOOGLE_CLIENT_ID")?,
            client_secret: required("GOOGLE_CLIENT_SECRET")?,
            callback_url: required("GOOGLE_REDIRECT_URI")?,
            scope: lookup("GOOGLE_SCOPE").map(ScopeInput::from),
            access_type,
            include_granted_scopes,
            prompt,
            hd: lookup("GOOGLE_HD"),
            login_hint: lookup("GOOGLE_LOGIN_HINT"),
        };

        log::debug!("Google 전략 옵션 로드됨: client_id={}", options.client_id);
        Ok(options)
    }
}
