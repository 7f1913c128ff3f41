//! 도메인 모델 모듈

pub mod oauth;
