//! # OAuth Domain Models Module
//!
//! OAuth 2.0 인증 플로우와 관련된 도메인 모델들을 정의하는 모듈입니다.
//!
//! - **`authorization_params`**: 인증 리다이렉트 쿼리 파라미터 (`AuthorizationParams`)
//! - **`google_oauth_model`**: Google 스코프, 사용자 정보, 프로필, 토큰 모델

pub mod authorization_params;
pub mod google_oauth_model;

pub use authorization_params::AuthorizationParams;
