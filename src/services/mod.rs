//! 서비스 계층

pub mod auth;
