//! # Auth Services Module
//!
//! OAuth2 엔진 인터페이스와 Google 프로바이더 어댑터를 제공합니다.
//!
//! - **`oauth2_strategy`**: 엔진과 어댑터 사이의 트레이트 경계 (`OAuth2Provider`, `VerifyCallback`)
//! - **`google_strategy`**: Google 어댑터 (`GoogleStrategy`)

pub mod google_strategy;
pub mod oauth2_strategy;

pub use google_strategy::*;
pub use oauth2_strategy::*;
