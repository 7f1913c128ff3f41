//! # Google OAuth 2.0 Domain Models
//!
//! Google OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의하는 모듈입니다.
//!
//! ## 주요 구성 요소
//!
//! - **`google_scope`**: 스코프 리터럴과 정규화 (`GoogleScope`, `ScopeInput`)
//! - **`google_user`**: UserInfo v3 원본 응답 (`GoogleUserInfo`)
//! - **`google_profile`**: 정규화된 프로필 (`GoogleProfile`)
//! - **`google_token`**: 엔진이 전달하는 토큰 결과 (`OAuth2Tokens`, `GoogleExtraParams`)
//!
//! ## Google OAuth 2.0 플로우
//!
//! ```text
//! 1. 엔진 → 인증 URL로 리다이렉트 (전략이 만든 파라미터 포함)
//! 2. Google → 인증 후 authorization_code와 함께 콜백
//! 3. 엔진 → authorization_code를 access_token으로 교환
//! 4. 전략 → access_token으로 사용자 정보 조회 후 프로필로 변환
//! 5. 엔진 → 검증 콜백에 { tokens, profile } 전달
//! ```
//!
//! ## Google API 엔드포인트
//!
//! ```text
//! 인증 URL: https://accounts.google.com/o/oauth2/v2/auth
//! 토큰 교환: https://oauth2.googleapis.com/token
//! UserInfo API: https://www.googleapis.com/oauth2/v3/userinfo
//! ```

pub mod google_profile;
pub mod google_scope;
pub mod google_token;
pub mod google_user;

pub use google_profile::{GoogleProfile, ProfileName, ProfileValue, GOOGLE_PROVIDER};
pub use google_scope::{GoogleScope, ScopeInput, GOOGLE_DEFAULT_SCOPES, GOOGLE_SCOPE_SEPARATOR};
pub use google_token::{GoogleExtraParams, OAuth2Tokens};
pub use google_user::GoogleUserInfo;
