//! Google 토큰 엔드포인트 응답 모델
//!
//! 토큰 교환 자체는 OAuth2 엔진이 수행하며,
//! 이 타입은 엔진이 넘겨준 결과를 타입으로 읽기 위한 용도입니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 엔진이 토큰 교환 후 넘겨주는 결과
///
/// 어댑터는 `access_token`만 사용하고, 나머지는 검증 콜백에 그대로 전달합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuth2Tokens<Extra> {
    pub access_token: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

/// Google 토큰 응답의 추가 파라미터
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleExtraParams {
    /// 액세스 토큰 만료까지 남은 초
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// 항상 `Bearer`
    pub token_type: String,

    /// 실제로 승인된 스코프 (공백 구분)
    #[serde(default)]
    pub scope: String,

    /// `openid` 스코프를 요청한 경우에만 존재
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,

    /// Google이 추가하는 그 밖의 문자열/숫자 필드
    #[serde(flatten)]
    pub other: HashMap<String, Value>,
}
