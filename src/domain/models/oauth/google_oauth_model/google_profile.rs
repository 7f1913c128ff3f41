//! 정규화된 Google 프로필
//!
//! UserInfo 원본 응답을 프로바이더에 독립적인 프로필 형태로 재구성합니다.
//! 검증 콜백에 한 번 전달된 뒤 폐기되며 캐싱되지 않습니다.

use serde::{Deserialize, Serialize};

use super::google_user::GoogleUserInfo;

/// 프로필의 `provider` 필드에 들어가는 고정 값
pub const GOOGLE_PROVIDER: &str = "google";

/// 구조화된 이름
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileName {
    pub family_name: Option<String>,
    pub given_name: Option<String>,
}

/// `emails`, `photos` 리스트의 원소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileValue {
    pub value: String,
}

/// 정규화된 Google 프로필
///
/// | 프로필 필드 | UserInfo 클레임 |
/// |-------------|-----------------|
/// | `id` | `sub` |
/// | `displayName` | `name` |
/// | `name.givenName` / `name.familyName` | `given_name` / `family_name` |
/// | `emails[0].value` | `email` |
/// | `photos[0].value` | `picture` |
/// | `_json` | 원본 응답 전체 |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleProfile {
    pub provider: String,
    pub id: String,
    pub display_name: Option<String>,
    pub name: ProfileName,
    pub emails: Vec<ProfileValue>,
    pub photos: Vec<ProfileValue>,
    #[serde(rename = "_json")]
    pub json: GoogleUserInfo,
}

impl From<GoogleUserInfo> for GoogleProfile {
    fn from(raw: GoogleUserInfo) -> Self {
        // 응답에 없는 이메일/사진은 빈 리스트로 둠
        let emails = raw
            .email
            .iter()
            .map(|email| ProfileValue { value: email.clone() })
            .collect();
        let photos = raw
            .picture
            .iter()
            .map(|picture| ProfileValue { value: picture.clone() })
            .collect();

        Self {
            provider: GOOGLE_PROVIDER.to_string(),
            id: raw.sub.clone(),
            display_name: raw.name.clone(),
            name: ProfileName {
                family_name: raw.family_name.clone(),
                given_name: raw.given_name.clone(),
            },
            emails,
            photos,
            json: raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn jane() -> GoogleUserInfo {
        serde_json::from_value(json!({
            "sub": "123",
            "name": "Jane Doe",
            "given_name": "Jane",
            "family_name": "Doe",
            "email": "jane@x.com",
            "picture": "http://p"
        }))
        .unwrap()
    }

    #[test]
    fn test_profile_mapping() {
        let profile = GoogleProfile::from(jane());

        assert_eq!(profile.provider, "google");
        assert_eq!(profile.id, "123");
        assert_eq!(profile.display_name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.name.given_name.as_deref(), Some("Jane"));
        assert_eq!(profile.name.family_name.as_deref(), Some("Doe"));
        assert_eq!(profile.emails, vec![ProfileValue { value: "jane@x.com".to_string() }]);
        assert_eq!(profile.photos, vec![ProfileValue { value: "http://p".to_string() }]);
        assert_eq!(profile.json, jane());
    }

    #[test]
    fn test_profile_serializes_in_camel_case() {
        let value = serde_json::to_value(GoogleProfile::from(jane())).unwrap();

        assert_eq!(value["displayName"], "Jane Doe");
        assert_eq!(value["name"]["givenName"], "Jane");
        assert_eq!(value["name"]["familyName"], "Doe");
        assert_eq!(value["emails"][0]["value"], "jane@x.com");
        assert_eq!(value["_json"]["given_name"], "Jane");
    }

    #[test]
    fn test_profile_without_email_scope() {
        let raw: GoogleUserInfo =
            serde_json::from_value(json!({ "sub": "9", "name": "No Mail" })).unwrap();
        let profile = GoogleProfile::from(raw);

        assert!(profile.emails.is_empty());
        assert!(profile.photos.is_empty());
        assert_eq!(profile.id, "9");
    }
}
