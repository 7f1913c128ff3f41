//! Google 사용자 정보 모델
//!
//! `https://www.googleapis.com/oauth2/v3/userinfo` 응답(OpenID Connect 클레임)을 표현합니다.
//! 인증 한 번에 한 번만 수신되는 읽기 전용 데이터입니다.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Google UserInfo v3 응답
///
/// `sub`만 필수입니다. 나머지 클레임은 요청한 스코프와 계정 종류에 따라
/// 응답에서 빠질 수 있으므로 `Option`으로 받습니다.
/// 모델에 없는 클레임은 `extra`에 그대로 보존되어 다시 직렬화할 때 원본과 같은 형태가 됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub sub: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,

    /// 프로필 이미지 URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,

    /// Google Workspace 호스팅 도메인 (개인 계정은 없음)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hd: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_payload() {
        let json = r#"{
            "sub": "1234567890",
            "name": "Jane Doe",
            "given_name": "Jane",
            "family_name": "Doe",
            "picture": "https://lh3.googleusercontent.com/a/photo",
            "locale": "ko",
            "email": "jane@example.com",
            "email_verified": true,
            "hd": "example.com"
        }"#;

        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.sub, "1234567890");
        assert_eq!(info.email_verified, Some(true));
        assert_eq!(info.hd.as_deref(), Some("example.com"));
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_missing_sub_is_rejected() {
        let result = serde_json::from_str::<GoogleUserInfo>(r#"{"name":"Jane Doe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_claims_are_preserved() {
        let json = r#"{"sub":"1","email":"a@b.c","nickname":"jd","age_range":{"min":21}}"#;
        let info: GoogleUserInfo = serde_json::from_str(json).unwrap();

        assert_eq!(info.extra.get("nickname"), Some(&Value::from("jd")));

        let round_trip = serde_json::to_value(&info).unwrap();
        let original: Value = serde_json::from_str(json).unwrap();
        assert_eq!(round_trip, original);
    }
}
