//! # Configuration Module
//!
//! Google OAuth 전략의 옵션 타입과 환경변수 기반 설정 로더를 제공합니다.

pub mod strategy_config;

pub use strategy_config::*;
