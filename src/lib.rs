//! Google OAuth 2.0 전략
//!
//! 범용 OAuth2 인가 코드 엔진에 꽂아 쓰는 Google 프로바이더 어댑터입니다.
//! 고정된 Google 엔드포인트를 제공하고, 인증 리다이렉트 파라미터를 만들며,
//! UserInfo 응답을 정규화된 프로필로 변환합니다.
//!
//! # Features
//!
//! - **스코프 정규화**: 공백 구분 문자열/타입 리스트를 생성 시점에 `Vec<GoogleScope>`로 통일
//! - **인증 파라미터**: `scope`, `access_type`, `include_granted_scopes`,
//!   `prompt`, `hd`, `login_hint`
//! - **프로필 매핑**: UserInfo v3 → `GoogleProfile` (원본 응답 보존)
//! - **조합형 엔진 경계**: 상속 대신 `OAuth2Provider` / `VerifyCallback` 트레이트
//!
//! 리다이렉트, 코드 교환, 토큰 갱신, state 검증, 세션 저장은 엔진의 몫입니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   OAuth2 엔진    │ ← 인가 코드 플로우 (외부)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ GoogleStrategy  │ ← authorization_params / user_profile
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Google UserInfo │ ← GET /oauth2/v3/userinfo
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use google_oauth_strategy::config::{AccessType, GoogleStrategyOptions};
//! use google_oauth_strategy::services::auth::{authorization_url, GoogleStrategy};
//!
//! let strategy = GoogleStrategy::new(
//!     GoogleStrategyOptions {
//!         client_id: "client-id".into(),
//!         client_secret: "client-secret".into(),
//!         callback_url: "https://example.com/auth/google/callback".into(),
//!         access_type: Some(AccessType::Offline),
//!         ..Default::default()
//!     },
//!     |params: VerifyParams<GoogleProfile, GoogleExtraParams>| async move {
//!         Ok(params.profile.id)
//!     },
//! )?;
//!
//! // 엔진이 만든 state로 리다이렉트 URL 생성
//! let redirect = authorization_url(&strategy, &state);
//!
//! // 코드 교환 후 엔진이 호출
//! let user = strategy.verify(tokens).await?;
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
