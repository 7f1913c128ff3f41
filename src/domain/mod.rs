//! 도메인 계층
//!
//! OAuth 인증 흐름에서 주고받는 데이터 모델을 정의합니다.

pub mod models;

pub use models::*;
