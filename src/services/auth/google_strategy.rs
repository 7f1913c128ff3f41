//! # Google OAuth 2.0 전략
//!
//! OAuth2 엔진에 꽂히는 Google 프로바이더 어댑터입니다.
//! 엔진이 구동하는 인가 코드 플로우에서 다음 두 지점만 담당합니다.
//!
//! ```text
//! ┌─────────────┐                        ┌─────────────────┐                      ┌─────────────────┐
//! │  OAuth2 엔진 │                        │ GoogleStrategy  │                      │  Google OAuth   │
//! └─────────────┘                        └─────────────────┘                      └─────────────────┘
//!        │ 1. authorization_params()            │                                         │
//!        ├─────────────────────────────────────►│                                         │
//!        │    scope, access_type, ...           │                                         │
//!        │◄─────────────────────────────────────┤                                         │
//!        │                                      │                                         │
//!        │ 2. (리다이렉트, 코드 교환은 엔진이 수행)  │                                         │
//!        │                                      │                                         │
//!        │ 3. user_profile(access_token)        │                                         │
//!        ├─────────────────────────────────────►│ GET /oauth2/v3/userinfo (Bearer)        │
//!        │                                      ├────────────────────────────────────────►│
//!        │                                      │◄────────────────────────────────────────┤
//!        │    GoogleProfile                     │                                         │
//!        │◄─────────────────────────────────────┤                                         │
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use google_oauth_strategy::config::GoogleStrategyOptions;
//! use google_oauth_strategy::services::auth::{GoogleStrategy, VerifyParams};
//!
//! let strategy = GoogleStrategy::new(
//!     GoogleStrategyOptions {
//!         client_id: "client-id".into(),
//!         client_secret: "client-secret".into(),
//!         callback_url: "https://example.com/auth/google/callback".into(),
//!         scope: Some("openid email".into()),
//!         ..Default::default()
//!     },
//!     |params: VerifyParams<GoogleProfile, GoogleExtraParams>| async move {
//!         Ok(params.profile.id)
//!     },
//! )?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{AccessType, GoogleStrategyOptions, Prompt};
use crate::domain::models::oauth::google_oauth_model::{
    google_scope::{join_scopes, normalize_scope},
    GoogleExtraParams, GoogleProfile, GoogleScope, GoogleUserInfo, OAuth2Tokens,
};
use crate::domain::models::oauth::AuthorizationParams;
use crate::errors::errors::{AppError, AppResult};
use crate::services::auth::oauth2_strategy::{
    OAuth2Provider, OAuth2StrategyConfig, VerifyCallback, VerifyParams,
};

/// 전략 이름
pub const GOOGLE_STRATEGY_NAME: &str = "google";

pub const GOOGLE_AUTHORIZATION_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USER_INFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

type GoogleVerifyCallback<User> = dyn VerifyCallback<User, GoogleProfile, GoogleExtraParams>;

/// Google 프로바이더 어댑터
///
/// 생성 후에는 변경되지 않으므로 `Arc`로 감싸 여러 요청에서 공유할 수 있습니다.
pub struct GoogleStrategy<User> {
    config: OAuth2StrategyConfig,
    scope: Vec<GoogleScope>,
    access_type: AccessType,
    include_granted_scopes: bool,
    prompt: Option<Prompt>,
    hd: Option<String>,
    login_hint: Option<String>,
    user_info_url: String,
    http_client: reqwest::Client,
    verify_callback: Arc<GoogleVerifyCallback<User>>,
}

impl<User> GoogleStrategy<User> {
    /// 옵션과 검증 콜백으로 전략을 생성합니다
    ///
    /// 스코프 입력은 이 시점에 정규화되며, 이후에는 `Vec<GoogleScope>`로만 다뤄집니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `client_id`, `client_secret`, `callback_url` 중
    ///   하나라도 비어 있는 경우
    pub fn new<V>(options: GoogleStrategyOptions, verify: V) -> AppResult<Self>
    where
        V: VerifyCallback<User, GoogleProfile, GoogleExtraParams> + 'static,
    {
        let GoogleStrategyOptions {
            client_id,
            client_secret,
            callback_url,
            scope,
            access_type,
            include_granted_scopes,
            prompt,
            hd,
            login_hint,
        } = options;

        let config = OAuth2StrategyConfig::new(
            client_id,
            client_secret,
            callback_url,
            GOOGLE_AUTHORIZATION_URL,
            GOOGLE_TOKEN_URL,
        )?;

        let strategy = Self {
            config,
            scope: normalize_scope(scope),
            access_type: access_type.unwrap_or_default(),
            include_granted_scopes: include_granted_scopes.unwrap_or(false),
            prompt,
            hd,
            login_hint,
            user_info_url: GOOGLE_USER_INFO_URL.to_string(),
            http_client: reqwest::Client::new(),
            verify_callback: Arc::new(verify),
        };

        log::info!(
            "Google 전략 생성: scope=\"{}\", access_type={}",
            join_scopes(&strategy.scope),
            strategy.access_type
        );

        Ok(strategy)
    }

    /// 사용자 정보 요청에 쓸 HTTP 클라이언트를 교체합니다 (타임아웃, 프록시 설정 등).
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = http_client;
        self
    }

    /// 사용자 정보 엔드포인트를 교체합니다.
    pub fn with_user_info_url(mut self, user_info_url: impl Into<String>) -> Self {
        self.user_info_url = user_info_url.into();
        self
    }

    pub fn scope(&self) -> &[GoogleScope] {
        &self.scope
    }

    pub fn access_type(&self) -> AccessType {
        self.access_type
    }

    pub fn include_granted_scopes(&self) -> bool {
        self.include_granted_scopes
    }

    pub fn prompt(&self) -> Option<Prompt> {
        self.prompt
    }

    pub fn hd(&self) -> Option<&str> {
        self.hd.as_deref()
    }

    pub fn login_hint(&self) -> Option<&str> {
        self.login_hint.as_deref()
    }

    pub fn user_info_url(&self) -> &str {
        &self.user_info_url
    }

    /// Google 전용 인증 파라미터를 만듭니다
    ///
    /// `scope`, `access_type`, `include_granted_scopes`는 항상 포함되고,
    /// `prompt`, `hd`, `login_hint`는 값이 있을 때만 뒤에 붙습니다.
    /// 같은 설정이면 항상 같은 결과를 냅니다.
    pub fn build_authorization_params(&self) -> AuthorizationParams {
        let mut params = AuthorizationParams::new();
        params.set("scope", join_scopes(&self.scope));
        params.set("access_type", self.access_type.as_str());
        params.set("include_granted_scopes", self.include_granted_scopes.to_string());

        if let Some(prompt) = self.prompt {
            params.set("prompt", prompt.as_str());
        }
        // 빈 문자열은 값이 없는 것으로 취급
        if let Some(hd) = self.hd.as_deref().filter(|hd| !hd.is_empty()) {
            params.set("hd", hd);
        }
        if let Some(login_hint) = self.login_hint.as_deref().filter(|hint| !hint.is_empty()) {
            params.set("login_hint", login_hint);
        }

        params
    }

    /// 사용자 정보를 조회해 정규화된 프로필로 변환합니다
    ///
    /// 재시도나 타임아웃은 하지 않습니다. 필요하면 호출 측이나
    /// [`with_http_client`](Self::with_http_client)로 주입한 클라이언트가 담당합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 네트워크 실패 또는 2xx가 아닌 응답
    /// * `AppError::ParseError` - 응답 본문이 UserInfo JSON이 아닌 경우
    pub async fn fetch_profile(&self, access_token: &str) -> AppResult<GoogleProfile> {
        let response = self
            .http_client
            .get(&self.user_info_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google 사용자 정보 조회 실패: status={}", status);
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패 ({}): {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Google 사용자 정보 응답 읽기 실패: {}", e))
            })?;

        let raw: GoogleUserInfo = serde_json::from_str(&body).map_err(|e| {
            AppError::ParseError(format!("Google 사용자 정보 파싱 실패: {}", e))
        })?;

        log::debug!("Google 사용자 정보 조회 성공: sub={}", raw.sub);

        Ok(GoogleProfile::from(raw))
    }

    /// 토큰 교환 이후 단계를 수행합니다
    ///
    /// 엔진이 교환한 토큰으로 프로필을 조회하고, `{ tokens, profile }`을 검증 콜백에 넘깁니다.
    /// 콜백의 에러는 그대로 전달됩니다.
    pub async fn verify(&self, tokens: OAuth2Tokens<GoogleExtraParams>) -> AppResult<User> {
        let profile = self.fetch_profile(&tokens.access_token).await?;
        let profile_id = profile.id.clone();

        let result = self
            .verify_callback
            .verify(VerifyParams { tokens, profile })
            .await;

        match &result {
            Ok(_) => log::info!("Google 사용자 검증 완료: sub={}", profile_id),
            Err(e) => log::warn!("Google 사용자 검증 실패: sub={}, 에러: {}", profile_id, e),
        }

        result
    }
}

#[async_trait]
impl<User> OAuth2Provider for GoogleStrategy<User>
where
    User: Send + 'static,
{
    type Profile = GoogleProfile;

    fn name(&self) -> &str {
        GOOGLE_STRATEGY_NAME
    }

    fn config(&self) -> &OAuth2StrategyConfig {
        &self.config
    }

    fn authorization_params(&self) -> AuthorizationParams {
        self.build_authorization_params()
    }

    async fn user_profile(&self, access_token: &str) -> AppResult<GoogleProfile> {
        self.fetch_profile(access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::oauth::google_oauth_model::ProfileValue;
    use crate::services::auth::oauth2_strategy::authorization_url;
    use serde_json::json;
    use wiremock::matchers::{bearer_token, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    type Verify = VerifyParams<GoogleProfile, GoogleExtraParams>;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn options() -> GoogleStrategyOptions {
        GoogleStrategyOptions {
            client_id: "client-id".to_string(),
            client_secret: "client-secret".to_string(),
            callback_url: "http://localhost:8080/auth/google/callback".to_string(),
            ..Default::default()
        }
    }

    fn strategy(options: GoogleStrategyOptions) -> GoogleStrategy<String> {
        GoogleStrategy::new(options, |params: Verify| async move {
            Ok::<_, AppError>(params.profile.id)
        })
        .unwrap()
    }

    fn tokens(access_token: &str) -> OAuth2Tokens<GoogleExtraParams> {
        serde_json::from_value(json!({
            "access_token": access_token,
            "expires_in": 3920,
            "token_type": "Bearer",
            "scope": "openid profile email",
            "id_token": "id.token.sig"
        }))
        .unwrap()
    }

    fn jane() -> serde_json::Value {
        json!({
            "sub": "123",
            "name": "Jane Doe",
            "given_name": "Jane",
            "family_name": "Doe",
            "email": "jane@x.com",
            "picture": "http://p"
        })
    }

    async fn userinfo_server(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/oauth2/v3/userinfo"))
            .and(bearer_token("test-token"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_new_requires_credentials() {
        let result = GoogleStrategy::<String>::new(
            GoogleStrategyOptions { client_id: String::new(), ..options() },
            |params: Verify| async move { Ok::<_, AppError>(params.profile.id) },
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        let result = GoogleStrategy::<String>::new(
            GoogleStrategyOptions { client_secret: String::new(), ..options() },
            |params: Verify| async move { Ok::<_, AppError>(params.profile.id) },
        );
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_new_stores_fixed_endpoints() {
        let strategy = strategy(options());

        assert_eq!(strategy.name(), "google");
        assert_eq!(strategy.config().authorization_url, GOOGLE_AUTHORIZATION_URL);
        assert_eq!(strategy.config().token_url, GOOGLE_TOKEN_URL);
        assert_eq!(strategy.user_info_url(), GOOGLE_USER_INFO_URL);
    }

    #[test]
    fn test_scope_normalization() {
        let from_string = strategy(GoogleStrategyOptions {
            scope: Some("openid email".into()),
            ..options()
        });
        assert_eq!(from_string.scope(), &[GoogleScope::OpenId, GoogleScope::Email]);

        let default = strategy(options());
        assert_eq!(
            default.scope(),
            &[GoogleScope::OpenId, GoogleScope::Profile, GoogleScope::Email]
        );

        let from_list = strategy(GoogleStrategyOptions {
            scope: Some(vec![GoogleScope::Profile].into()),
            ..options()
        });
        assert_eq!(from_list.scope(), &[GoogleScope::Profile]);
    }

    #[test]
    fn test_default_authorization_params() {
        let params = strategy(options()).authorization_params();

        assert_eq!(
            params.keys().collect::<Vec<_>>(),
            vec!["scope", "access_type", "include_granted_scopes"]
        );
        assert_eq!(params.get("scope"), Some("openid profile email"));
        assert_eq!(params.get("access_type"), Some("online"));
        assert_eq!(params.get("include_granted_scopes"), Some("false"));
    }

    #[test]
    fn test_full_authorization_params() {
        let params = strategy(GoogleStrategyOptions {
            access_type: Some(AccessType::Offline),
            include_granted_scopes: Some(true),
            prompt: Some(Prompt::SelectAccount),
            hd: Some("example.com".to_string()),
            login_hint: Some("jane@example.com".to_string()),
            ..options()
        })
        .authorization_params();

        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![
                ("scope", "openid profile email"),
                ("access_type", "offline"),
                ("include_granted_scopes", "true"),
                ("prompt", "select_account"),
                ("hd", "example.com"),
                ("login_hint", "jane@example.com"),
            ]
        );
    }

    #[test]
    fn test_optional_params_present_only_when_set() {
        let params = strategy(GoogleStrategyOptions {
            hd: Some("example.com".to_string()),
            login_hint: Some(String::new()),
            ..options()
        })
        .authorization_params();

        assert!(params.contains_key("hd"));
        assert!(!params.contains_key("prompt"));
        assert!(!params.contains_key("login_hint"));
        assert_eq!(params.len(), 4);
    }

    #[test]
    fn test_authorization_params_are_idempotent() {
        let strategy = strategy(GoogleStrategyOptions {
            prompt: Some(Prompt::Consent),
            ..options()
        });

        assert_eq!(strategy.authorization_params(), strategy.authorization_params());
    }

    #[test]
    fn test_authorization_url_points_at_google() {
        let strategy = strategy(GoogleStrategyOptions {
            scope: Some("openid email".into()),
            ..options()
        });
        let url = authorization_url(&strategy, "state-123");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("scope=openid%20email"));
        assert!(url.contains("access_type=online"));
        assert!(url.contains("client_id=client-id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("state=state-123"));
    }

    #[tokio::test]
    async fn test_user_profile_maps_userinfo() {
        init_logger();
        let server = userinfo_server(ResponseTemplate::new(200).set_body_json(jane())).await;
        let strategy = strategy(options())
            .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let profile = strategy.user_profile("test-token").await.unwrap();

        assert_eq!(profile.provider, "google");
        assert_eq!(profile.id, "123");
        assert_eq!(profile.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.name.given_name.as_deref(), Some("Jane"));
        assert_eq!(profile.name.family_name.as_deref(), Some("Doe"));
        assert_eq!(profile.emails, vec![ProfileValue { value: "jane@x.com".to_string() }]);
        assert_eq!(profile.photos, vec![ProfileValue { value: "http://p".to_string() }]);
        assert_eq!(serde_json::to_value(&profile.json).unwrap(), jane());
    }

    #[tokio::test]
    async fn test_user_profile_fails_on_error_status() {
        init_logger();
        let server = userinfo_server(
            ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_token" })),
        )
        .await;
        let strategy = strategy(options())
            .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let result = strategy.user_profile("test-token").await;

        match result {
            Err(AppError::ExternalServiceError(msg)) => assert!(msg.contains("401")),
            other => panic!("Expected ExternalServiceError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_user_profile_fails_on_malformed_json() {
        init_logger();
        let server =
            userinfo_server(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;
        let strategy = strategy(options())
            .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let result = strategy.user_profile("test-token").await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_user_profile_fails_without_subject() {
        init_logger();
        let server = userinfo_server(
            ResponseTemplate::new(200).set_body_json(json!({ "name": "Jane Doe" })),
        )
        .await;
        let strategy = strategy(options())
            .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let result = strategy.user_profile("test-token").await;
        assert!(matches!(result, Err(AppError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_user_profile_fails_on_network_error() {
        init_logger();
        // discard 포트: 연결 거부
        let strategy =
            strategy(options()).with_user_info_url("http://127.0.0.1:9/oauth2/v3/userinfo");
        let result = strategy.user_profile("test-token").await;

        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }

    #[tokio::test]
    async fn test_verify_passes_tokens_and_profile_to_callback() {
        init_logger();
        let server = userinfo_server(ResponseTemplate::new(200).set_body_json(jane())).await;
        let strategy = GoogleStrategy::<String>::new(options(), |params: Verify| async move {
            Ok::<_, AppError>(format!(
                "{}:{}:{}",
                params.profile.id,
                params.tokens.extra.token_type,
                params.tokens.extra.expires_in.unwrap_or_default()
            ))
        })
        .unwrap()
        .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let user = strategy.verify(tokens("test-token")).await.unwrap();
        assert_eq!(user, "123:Bearer:3920");
    }

    #[tokio::test]
    async fn test_verify_propagates_callback_rejection() {
        init_logger();
        let server = userinfo_server(ResponseTemplate::new(200).set_body_json(jane())).await;
        let strategy = GoogleStrategy::<String>::new(options(), |_params: Verify| async move {
            Err::<String, _>(AppError::AuthenticationError("등록되지 않은 사용자".to_string()))
        })
        .unwrap()
        .with_user_info_url(format!("{}/oauth2/v3/userinfo", server.uri()));

        let result = strategy.verify(tokens("test-token")).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }
}
