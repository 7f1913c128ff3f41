//! # OAuth2 전략 엔진 인터페이스
//!
//! 인가 코드 플로우를 구동하는 OAuth2 엔진과 프로바이더 어댑터 사이의 경계입니다.
//! 엔진은 상속 대신 조합으로 어댑터를 받아 정해진 시점에 확장 지점을 호출합니다.
//!
//! ```text
//! ┌──────────────┐  authorization_params()  ┌──────────────────┐
//! │              ├─────────────────────────►│                  │
//! │ OAuth2 엔진   │  user_profile(token)     │ OAuth2Provider   │
//! │ (외부 구현)   ├─────────────────────────►│ (GoogleStrategy) │
//! │              │                          └──────────────────┘
//! │              │  verify({ tokens, profile })  ┌──────────────┐
//! │              ├──────────────────────────────►│VerifyCallback│
//! └──────────────┘                               └──────────────┘
//! ```
//!
//! 리다이렉트, 코드 교환, 토큰 저장, state 생성/검증은 엔진의 몫이며 여기서 구현하지 않습니다.

use std::future::Future;

use async_trait::async_trait;
use validator::Validate;

use crate::domain::models::oauth::google_oauth_model::OAuth2Tokens;
use crate::domain::models::oauth::AuthorizationParams;
use crate::errors::errors::AppResult;

/// 엔진 기본 설정
///
/// 클라이언트 자격 증명과 프로바이더 엔드포인트를 담습니다.
/// 생성 시점에 검증되며 이후에는 변경되지 않습니다.
#[derive(Debug, Clone, Validate)]
pub struct OAuth2StrategyConfig {
    #[validate(length(min = 1, message = "client_id가 필요합니다"))]
    pub client_id: String,

    #[validate(length(min = 1, message = "client_secret이 필요합니다"))]
    pub client_secret: String,

    #[validate(length(min = 1, message = "callback_url이 필요합니다"))]
    pub callback_url: String,

    #[validate(url(message = "authorization_url은 유효한 URL이어야 합니다"))]
    pub authorization_url: String,

    #[validate(url(message = "token_url은 유효한 URL이어야 합니다"))]
    pub token_url: String,
}

impl OAuth2StrategyConfig {
    /// 기본 설정을 만들고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 필수 항목이 비어 있거나 엔드포인트가 URL이 아닌 경우
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        callback_url: impl Into<String>,
        authorization_url: impl Into<String>,
        token_url: impl Into<String>,
    ) -> AppResult<Self> {
        let config = Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            callback_url: callback_url.into(),
            authorization_url: authorization_url.into(),
            token_url: token_url.into(),
        };

        config.validate()?;
        Ok(config)
    }
}

/// 프로바이더 어댑터가 구현하는 두 확장 지점
#[async_trait]
pub trait OAuth2Provider: Send + Sync {
    /// 정규화된 프로필 타입
    type Profile: Send;

    /// 전략 이름
    fn name(&self) -> &str;

    fn config(&self) -> &OAuth2StrategyConfig;

    /// 인증 리다이렉트에 붙일 프로바이더 전용 쿼리 파라미터
    fn authorization_params(&self) -> AuthorizationParams;

    /// 액세스 토큰으로 사용자 정보를 조회해 프로필로 변환합니다.
    async fn user_profile(&self, access_token: &str) -> AppResult<Self::Profile>;
}

/// 검증 콜백에 전달되는 값
#[derive(Debug, Clone)]
pub struct VerifyParams<Profile, Extra> {
    pub tokens: OAuth2Tokens<Extra>,
    pub profile: Profile,
}

/// 애플리케이션이 구현하는 검증 콜백
///
/// 토큰과 프로필을 받아 애플리케이션의 사용자 표현을 돌려줍니다.
/// 에러를 반환하면 엔진은 인증 실패로 처리합니다.
#[async_trait]
pub trait VerifyCallback<User, Profile, Extra>: Send + Sync {
    async fn verify(&self, params: VerifyParams<Profile, Extra>) -> AppResult<User>;
}

#[async_trait]
impl<F, Fut, User, Profile, Extra> VerifyCallback<User, Profile, Extra> for F
where
    F: Fn(VerifyParams<Profile, Extra>) -> Fut + Send + Sync,
    Fut: Future<Output = AppResult<User>> + Send + 'static,
    User: Send + 'static,
    Profile: Send + 'static,
    Extra: Send + 'static,
{
    async fn verify(&self, params: VerifyParams<Profile, Extra>) -> AppResult<User> {
        (self)(params).await
    }
}

/// 엔진이 브라우저를 보낼 인증 URL을 조립합니다.
///
/// 프로바이더 파라미터 위에 엔진 관리 파라미터(`response_type`, `client_id`,
/// `redirect_uri`, `state`)를 덮어씁니다. `state`는 엔진이 생성한 값을 그대로 받습니다.
pub fn authorization_url<P>(provider: &P, state: &str) -> String
where
    P: OAuth2Provider + ?Sized,
{
    let config = provider.config();

    let mut engine_params = AuthorizationParams::new();
    engine_params.set("response_type", "code");
    engine_params.set("client_id", config.client_id.as_str());
    engine_params.set("redirect_uri", config.callback_url.as_str());
    engine_params.set("state", state);

    let mut params = provider.authorization_params();
    params.extend(&engine_params);

    format!("{}?{}", config.authorization_url, params.to_query_string())
}
